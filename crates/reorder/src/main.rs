// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Generate an order key from the command line, or replay the demo list.

use clap::Parser;
use ordkey::Alphabet;
use ordkey::AlphabetConfig;
use ordkey::Generator;
use ordkey::alphabet::BASE36;
use reorder::DragSession;
use reorder::ItemStore;
use reorder::Placement;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "reorder")]
#[command(about = "Generate a key between two order keys")]
struct Args {
    /// Symbols of the key space, in rank order.
    #[arg(short, long, default_value = BASE36)]
    alphabet: String,

    /// Key handed out for an empty list. Defaults to `m` for the base-36
    /// alphabet and to the middle symbol otherwise.
    #[arg(short, long)]
    seed: Option<char>,

    /// Replay a few moves on the fruit list instead of generating one key.
    #[arg(long)]
    demo: bool,

    /// Key below the gap; omit or pass `-` for none.
    lower: Option<String>,

    /// Key above the gap; omit or pass `-` for none.
    upper: Option<String>,
}

fn bound(arg: &Option<String>) -> Option<&str> {
    return arg.as_deref().filter(|text| *text != "-");
}

fn print_list(store: &ItemStore) {
    for item in store.sorted() {
        println!("  {:<12} {}", item.text, store.render(&item.key));
    }
}

fn demo(generator: Generator) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ItemStore::fruit(generator)?;
    let ids: Vec<_> = store.sorted().iter().map(|item| item.id).collect();
    println!("Initial order:");
    print_list(&store);

    // (dragged, target, side), as indices into the initial order.
    let moves = [
        (4, 0, Placement::Before),
        (0, 1, Placement::After),
        (3, 1, Placement::After),
        (2, 1, Placement::After),
    ];

    let mut session = DragSession::new();
    for (dragged, target, placement) in moves {
        session.begin(ids[dragged]);
        session.hover(ids[target], placement);
        match session.drop(&mut store)? {
            Some(calc) => println!("\n{}", calc),
            None => println!("\n(no change)"),
        }
    }

    println!("\nFinal order:");
    print_list(&store);
    return Ok(());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let seed = match args.seed {
        Some(seed) => Some(seed),
        None if args.alphabet == BASE36 => Some(ordkey::alphabet::BASE36_SEED),
        None => None,
    };
    let config = AlphabetConfig { symbols: args.alphabet.clone(), seed };
    let alphabet = Alphabet::from_config(&config)?;
    info!(alphabet = %alphabet, size = alphabet.len(), "using alphabet");
    let generator = Generator::new(alphabet);

    if args.demo {
        return demo(generator);
    }

    let key = generator.between(bound(&args.lower), bound(&args.upper))?;
    println!("{}", key);
    return Ok(());
}
