use colored::*;

use crate::terminal::print;

const BANNER_0: &str = r#"
                                         _
             __ _ _ __ ___  ___ _____| |_ ___ _ __
            / _` | '__/ _ \/ _ \_____| __/ _ \ '__|
           | (_| | | |  __/  __/     | ||  __/ |
            \__, |_|  \___|\___|      \__\___|_|
            |___/
"#;

const BANNER_1: &str = r#"
          ╔═╗╦═╗╔═╗╔═╗╔╦╗╔═╗╦═╗
          ║ ╦╠╦╝║╣ ║╣  ║ ║╣ ╠╦╝    ·  hello, world!
          ╚═╝╩╚═╚═╝╚═╝ ╩ ╚═╝╩╚═    ·  5 + 3 = 8
"#;

const BANNER_2: &str = r#"
           ___  ___  ___  ___  ___  ___  ___
          | G || R || E || E || T || E || R |
          |___||___||___||___||___||___||___|
"#;

pub fn print() {
    let art: ColoredString = match rand::random_range(0..3u8) {
        0 => BANNER_0.green(),
        1 => BANNER_1.truecolor(255, 165, 0),
        _ => BANNER_2.blue(),
    };
    print::print(&art.to_string());
}
