/// Default `settings.conf` written on first start.
pub const SETTINGS_SKELETON_CONTENT: &str = "\
# appshelf settings
#
# Lines are `key = value`; `#` starts a comment.

# Initial ordering of the Apps page: none | rating | high-low | low-high
sort_mode = none

# Simulated delay before installed apps are available (milliseconds)
initial_load_ms = 800

# How long notifications stay on screen (milliseconds)
toast_ms = 3000

# How long the search spinner shows after typing (milliseconds)
search_debounce_ms = 500

# Number of featured apps on the Home page
featured_count = 4

# Show the key hints footer
show_keybinds_footer = true
";
