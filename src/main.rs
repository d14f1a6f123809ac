mod entry;
mod logger;

use snipe::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
