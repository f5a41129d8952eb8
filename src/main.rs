//! rigtimelog main entrypoint.

use rigtimelog::run;
use rigtimelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
