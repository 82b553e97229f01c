//! dayclock main entrypoint.

use dayclock::run;
use dayclock::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
