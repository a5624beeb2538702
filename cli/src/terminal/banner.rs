use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                ___ ___  __  __ ___ ___
               / __/ _ \|  \/  | _ )_ _|
              | (_| (_) | |\/| | _ \| |
               \___\___/|_|  |_|___/___|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
}
