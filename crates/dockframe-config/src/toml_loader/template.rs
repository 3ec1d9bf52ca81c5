//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> String {
    r##"# Dockframe configuration
# Only override what you want to change -- missing fields use defaults.

[timeouts]
# container_creation_ms = 10000   # 1-60000
# window_creation_ms = 10000      # 1-60000
# window_load_ms = 5000           # 1-60000
# layout_init_ms = 10000          # 1-60000

[layout]
# header_height = 30.0            # 0-200
# frame_width = 1280.0            # 100-20000
# frame_height = 720.0            # 100-20000
# default_title = "Untitled"

[logging]
# level = "info"                  # trace, debug, info, warn, error

[events]
# capacity = 256                  # 16-65536
"##
    .to_string()
}
