//! offerdesk main entrypoint.

use offerdesk::run;
use offerdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
