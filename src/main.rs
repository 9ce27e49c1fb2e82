//! go-getter: collect external Go imports into a manifest and replay it with `go get`

use anyhow::Result;

fn main() -> Result<()> {
    go_getter::cli::run()
}
