//! Petbase CLI
//!
//! Command-line front end to a local petbase data directory. Stands in
//! for the app's screens when inspecting or editing collections by hand.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use petbase::{
    AdoptionPetFields, ClientFields, Config, Engine, EntityFields, EntityKind, PetFields,
    PetShopFields, Record, RecordId, ReloadHook, Result, Validate, VeterinarianFields,
};

/// Petbase CLI
#[derive(Parser, Debug)]
#[command(name = "petbase-cli")]
#[command(about = "Local collection store for the pet-management app")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./petbase_data")]
    data_dir: String,

    /// Pretty-print persisted documents
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all records of a kind
    List {
        /// Entity kind (pets, petsAdocao, clientes, petshops, veterinarios)
        kind: EntityKind,
    },

    /// Create a record from a JSON object of fields (no id)
    Add {
        /// Entity kind
        kind: EntityKind,

        /// Fields as JSON, e.g. '{"nome":"Rex","raca":"Labrador","idade":3}'
        #[arg(long)]
        json: String,
    },

    /// Replace a stored record from a full record JSON object (id included)
    Update {
        /// Entity kind
        kind: EntityKind,

        /// Full record as JSON, id included
        #[arg(long)]
        json: String,
    },

    /// Delete a record by id
    Del {
        /// Entity kind
        kind: EntityKind,

        /// Record id
        id: u64,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,petbase=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::debug!("petbase v{}, data directory: {}", petbase::VERSION, args.data_dir);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .pretty(args.pretty)
        .build();

    let engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open data directory: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&engine, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(engine: &Engine, command: Commands) -> Result<()> {
    match command {
        Commands::List { kind } => dispatch(kind, engine, CmdList),
        Commands::Add { kind, json } => dispatch(kind, engine, CmdAdd { json }),
        Commands::Update { kind, json } => dispatch(kind, engine, CmdUpdate { json }),
        Commands::Del { kind, id } => dispatch(kind, engine, CmdDel { id }),
    }
}

// =============================================================================
// Kind Dispatch
// =============================================================================

/// A command body, generic over the entity shape of the chosen kind
trait KindCommand {
    fn run<F>(self, engine: &Engine) -> Result<()>
    where
        F: EntityFields + Validate + serde::Serialize;
}

/// Pick the field shape matching `kind` and run `cmd` with it
fn dispatch<C: KindCommand>(kind: EntityKind, engine: &Engine, cmd: C) -> Result<()> {
    match kind {
        EntityKind::Pet => cmd.run::<PetFields>(engine),
        EntityKind::AdoptionPet => cmd.run::<AdoptionPetFields>(engine),
        EntityKind::Client => cmd.run::<ClientFields>(engine),
        EntityKind::PetShop => cmd.run::<PetShopFields>(engine),
        EntityKind::Veterinarian => cmd.run::<VeterinarianFields>(engine),
    }
}

struct CmdList;

impl KindCommand for CmdList {
    fn run<F>(self, engine: &Engine) -> Result<()>
    where
        F: EntityFields + Validate + serde::Serialize,
    {
        let records = engine.list::<F>()?;
        println!("{}", render(&records));
        Ok(())
    }
}

struct CmdAdd {
    json: String,
}

impl KindCommand for CmdAdd {
    fn run<F>(self, engine: &Engine) -> Result<()>
    where
        F: EntityFields + Validate + serde::Serialize,
    {
        let fields: F = parse_json(F::KIND, &self.json)?;
        let record = engine.create_validated(fields, &ReloadHook::none())?;
        println!("{}", render(&record));
        Ok(())
    }
}

struct CmdUpdate {
    json: String,
}

impl KindCommand for CmdUpdate {
    fn run<F>(self, engine: &Engine) -> Result<()>
    where
        F: EntityFields + Validate + serde::Serialize,
    {
        let record: Record<F> = parse_json(F::KIND, &self.json)?;
        let record = engine.update_validated(record, &ReloadHook::none())?;
        println!("{}", render(&record));
        Ok(())
    }
}

struct CmdDel {
    id: u64,
}

impl KindCommand for CmdDel {
    fn run<F>(self, engine: &Engine) -> Result<()>
    where
        F: EntityFields + Validate + serde::Serialize,
    {
        let removed = engine.delete::<F>(RecordId(self.id), &ReloadHook::none())?;
        if removed {
            println!("deleted {}", self.id);
        } else {
            println!("no record with id {}", self.id);
        }
        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn parse_json<T: serde::de::DeserializeOwned>(
    kind: EntityKind,
    raw: &str,
) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| petbase::PetbaseError::Decode {
        key: kind.storage_key().to_string(),
        reason: e.to_string(),
    })
}

fn render<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "<unprintable>".to_string())
}
