mod get_zone;
