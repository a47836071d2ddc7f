use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
          ___ __ _ _ __ __ ___   ____ _ _ __
         / __/ _` | '__/ _` \ \ / / _` | '_ \
        | (_| (_| | | | (_| |\ V / (_| | | | |
         \___\__,_|_|  \__,_| \_/ \__,_|_| |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.truecolor(255, 165, 0)));
}
