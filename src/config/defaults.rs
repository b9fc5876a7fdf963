use std::path::PathBuf;

pub fn default_source() -> PathBuf {
    PathBuf::from("./")
}

pub fn default_destination() -> PathBuf {
    PathBuf::from("./_site")
}

pub fn default_content_root_id() -> String {
    "body".to_string()
}

pub fn default_toc_container_id() -> String {
    "toc".to_string()
}

pub fn default_list_class() -> String {
    "toc".to_string()
}

pub fn default_id_prefix() -> String {
    "toc".to_string()
}

pub fn default_ordered_list() -> bool {
    false
}

pub fn default_min_headings() -> usize {
    2
}

pub fn default_html_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

pub fn default_exclude() -> Vec<String> {
    Vec::new()
}
