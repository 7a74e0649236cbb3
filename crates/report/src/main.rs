use macheps::catalog;
use macheps_search::Config;

fn main() {
    let config = Config::default();

    print!("{}", catalog::multiplicative(&config));
    print!("{}", catalog::additive(&config));
}
