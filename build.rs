use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // The document root needs a tag, an empty one would render as `<>`
    let root_tag = table
        .get("html")
        .and_then(|html| html.get("root_tag"))
        .and_then(|tag| tag.as_str());
    match root_tag {
        Some(tag) if !tag.is_empty() => {}
        _ => panic!("default_config.toml must set a non-empty [html] root_tag"),
    }
}
