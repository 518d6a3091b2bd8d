//! Terminal front-end for the bundled card catalog.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mtg_catalog::config::{DATA_FILE_ENV, DEFAULT_DATA_FILE};
use mtg_catalog::models::ImageSize;
use mtg_catalog::queries::cards::{SearchCardsParams, SortDirection};
use mtg_catalog::queries::legalities::LegalityRow;
use mtg_catalog::{DetailView, Format, ImageSlot, MtgCatalog, Panel, SlotGlyph, SortKey};

#[derive(Parser)]
#[command(name = "mtg-catalog", version, about = "Browse a bundled Scryfall card list")]
struct Cli {
    /// Catalog document (.json or .json.gz)
    #[arg(long, global = true, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    data: PathBuf,

    /// Directory for cached artwork
    #[arg(long, global = true)]
    image_cache: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List cards, filtered by name and sorted
    List {
        #[arg(long, short, default_value = "")]
        search: String,
        #[arg(long, default_value = "name")]
        sort: SortKey,
        #[arg(long)]
        set: Option<String>,
        #[arg(long)]
        legal_in: Option<Format>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show the detail view of one card
    Show {
        /// Card id or exact name
        card: String,
        /// Open on the legality panel instead of prices
        #[arg(long)]
        rulings: bool,
        /// Show the zoomed artwork URL
        #[arg(long)]
        expanded: bool,
        /// Step next (+) or previous (-) through the catalog before rendering
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
    /// Print the legality grid of one card
    Formats { card: String },
    /// Download a card's artwork
    FetchImage {
        card: String,
        #[arg(long, default_value = "normal")]
        size: ImageSize,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long)]
        offline: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> mtg_catalog::Result<()> {
    let offline = matches!(cli.command, Command::FetchImage { offline: true, .. });
    let mut builder = MtgCatalog::builder().data_file(&cli.data).offline(offline);
    if let Some(dir) = &cli.image_cache {
        builder = builder.image_cache_dir(dir);
    }
    if matches!(cli.command, Command::Show { rulings: true, .. }) {
        builder = builder.initial_panel(Panel::ShowingRulings);
    }
    let mut catalog = builder.build()?;
    if let Some(e) = catalog.load_error() {
        eprintln!("warning: catalog is empty ({e})");
    }

    match cli.command {
        Command::List {
            search,
            sort,
            set,
            legal_in,
            limit,
        } => {
            let params = SearchCardsParams {
                name: Some(search),
                set_code: set,
                legal_in,
                sort,
                limit,
                offset: None,
            };
            let cards = catalog.cards().search_with(&params);
            let arrow = match sort.direction() {
                SortDirection::Ascending => "↑",
                SortDirection::Descending => "↓",
            };
            println!("{} cards (sorted by {sort} {arrow})", cards.len());
            for card in cards {
                println!(
                    "{:>5}  {:<32} {:<12} {}",
                    card.collector_number, card.name, card.mana_cost, card.id
                );
            }
        }
        Command::Show {
            card,
            expanded,
            offset,
            ..
        } => {
            let mut view = catalog.open_card(&card)?;
            if offset != 0 {
                view.step(offset);
            }
            if expanded {
                view.state_mut().tap_artwork();
            }
            print_detail(&view);
        }
        Command::Formats { card } => {
            let card = catalog.store().resolve(&card)?;
            let (left, right) = mtg_catalog::queries::legality_grid(card);
            println!("LEGALITIES — {}", card.name);
            print_grid(&left, &right);
        }
        Command::FetchImage {
            card, size, out, ..
        } => {
            let record = catalog.store().resolve(&card)?.clone();
            let slot = catalog.images().fetch_card(&record, size);
            match (&slot, out) {
                (ImageSlot::Loaded(bytes), Some(path)) => {
                    fs::write(&path, bytes)?;
                    println!("wrote {} bytes to {}", bytes.len(), path.display());
                }
                (ImageSlot::Loaded(bytes), None) => println!("fetched {} bytes", bytes.len()),
                (ImageSlot::Missing, _) => println!("no {size} image for {}", record.name),
                (ImageSlot::Failed(reason), _) => println!("image failed: {reason}"),
                (ImageSlot::Loading, _) => println!("image still loading"),
            }
        }
    }
    Ok(())
}

fn print_detail(view: &DetailView<'_>) {
    let card = view.card();
    let symbols: Vec<String> = view.mana_symbols().iter().map(|s| s.to_string()).collect();

    println!("[{}/{}] {}  {}", view.index() + 1, view.len(), card.name, symbols.join(""));
    println!("{}", card.type_line);
    println!();
    println!("{}", card.oracle_text);
    println!();
    match view.artwork_url() {
        Some(url) => println!("artwork ({}): {url}", view.state().artwork_size()),
        None => println!("artwork: {}", glyph_label(SlotGlyph::Placeholder)),
    }

    if let Some(block) = view.price_block() {
        println!();
        println!("PRICES FROM  {}", block.set_heading);
        println!("{:<8} {:>10} {:>10}", "", "Normal", "Foil");
        println!(
            "{:<8} {:>10} {:>10}",
            "RETAIL",
            block.normal.retail_label(),
            block.foil.retail_label()
        );
        println!(
            "{:<8} {:>10} {:>10}",
            "BUYLIST",
            block.normal.buylist_label(),
            block.foil.buylist_label()
        );
    }
    if let Some((left, right)) = view.legality_grid() {
        println!();
        println!("LEGALITIES");
        print_grid(&left, &right);
    }
}

fn print_grid(left: &[LegalityRow], right: &[LegalityRow]) {
    for i in 0..left.len().max(right.len()) {
        let cell = |row: Option<&LegalityRow>| match row {
            Some(r) => format!("{:<9} {:<18}", r.status.label(), r.format.label()),
            None => String::new(),
        };
        println!("{}  {}", cell(left.get(i)), cell(right.get(i)));
    }
}

fn glyph_label(glyph: SlotGlyph) -> &'static str {
    match glyph {
        SlotGlyph::Placeholder => "[no image]",
        SlotGlyph::Progress => "[loading]",
        SlotGlyph::Image => "[image]",
        SlotGlyph::Error => "[!]",
    }
}
