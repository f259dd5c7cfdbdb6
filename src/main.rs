use chained_list::{LinkedSequence, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "Walks a chained list through pushes, insertions and removals")]
struct CmdOptions {
    #[clap(
        short = 'n',
        long,
        help = "Number of values (0..count) pushed before the other operations",
        default_value = "10"
    )]
    count: usize,
    #[clap(long, help = "Index of the first insertion", default_value = "2")]
    insert_at: usize,
    #[clap(long, help = "Index of the first positional removal", default_value = "7")]
    remove_at: usize,
}

fn main() {
    // Log at info unless RUST_LOG says otherwise
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let options = CmdOptions::parse();
    log::debug!("{:?}", options);

    if let Err(err) = run(&options) {
        log::error!("List operation failed: {}", err);
        std::process::exit(1);
    }
}

fn run(options: &CmdOptions) -> Result<()> {
    let mut list: LinkedSequence<usize> = LinkedSequence::new();
    println!("{}", list);

    for i in 0..options.count {
        list.push(i);
    }
    println!("{}", list);

    list.insert(options.count, options.insert_at)?;
    println!("{}", list);

    println!("Remove returned: {}", list.remove(options.remove_at)?);
    println!("{}", list);

    println!("Pop returned: {}", list.pop()?);
    println!("{}", list);

    println!("Remove returned: {}", list.remove(0)?);
    println!("{}", list);

    list.insert(options.count + 1, 0)?;
    println!("{}", list);

    list.clear();
    println!("{}", list.is_empty());
    log::info!("Done");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use chained_list::ListError;

    #[test]
    fn test_default_options_run() {
        let options = CmdOptions::parse_from(["chained_list"]);
        assert_eq!(options.count, 10);
        assert_eq!(options.insert_at, 2);
        assert_eq!(options.remove_at, 7);
        assert!(run(&options).is_ok());
    }

    #[test]
    fn test_bad_index_is_reported() {
        let options = CmdOptions::parse_from(["chained_list", "-n", "3", "--remove-at", "9"]);
        assert_eq!(
            run(&options),
            Err(ListError::OutOfRange { index: 9, size: 4 })
        );
    }

    #[test]
    fn test_empty_run_fails_on_pop() {
        // insert at 0 and remove at 0 leave nothing to pop
        let options =
            CmdOptions::parse_from(["chained_list", "-n", "0", "--insert-at", "0", "--remove-at", "0"]);
        assert_eq!(run(&options), Err(ListError::EmptyContainer));
    }
}
