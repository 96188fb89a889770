//! sldb main entrypoint.

use sldatabase::run;
use sldatabase::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
