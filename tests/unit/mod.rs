mod test_xml;
