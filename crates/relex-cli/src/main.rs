mod cli;
mod commands;
mod util;

use cli::{DotParams, PostParams, TableParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("table", m)) => {
            let params = TableParams::from_matches(m);
            commands::table::run(params.into());
        }
        Some(("dot", m)) => {
            let params = DotParams::from_matches(m);
            commands::dot::run(params.into());
        }
        Some(("post", m)) => {
            let params = PostParams::from_matches(m);
            commands::post::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
