//! Console driver for the hb-core spell and status engine
//!
//! Lists realm spells, casts them against a recording effect collaborator,
//! and exercises the elemental brand/immunity menus and the stun ranks.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use hb_core::context::{MessageLog, ScriptedInput};
use hb_core::magic::{
    AppliedEffect, CastOutcome, EffectLog, ElementKind, Realm, cast_spell, choose_ele_attack,
    choose_ele_immune, spell_description, spell_info, spell_name,
};
use hb_core::player::{Direction, Player, PlayerClass};
use hb_core::status::PlayerStun;
use hb_core::{GameContext, GameOptions, GameRng, Locale};

/// Spell and status engine for a Hengband-style roguelike
#[derive(Parser)]
#[command(name = "hengband")]
#[command(version)]
#[command(about = "Inspect and cast realm spells, brands and immunities", long_about = None)]
struct Cli {
    /// Message language (en or ja); overrides the config file
    #[arg(long, global = true)]
    locale: Option<String>,

    /// rc-style options file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every spell of a realm with its menu summary
    List(ListArgs),

    /// Cast one spell and print what it did
    Cast(CastArgs),

    /// Pick a temporary elemental brand
    Brand(BrandArgs),

    /// Pick a temporary elemental immunity
    Immune(ImmuneArgs),

    /// Show the stun rank for an accumulator value
    Stun(StunArgs),
}

#[derive(Args)]
struct CasterArgs {
    /// Caster level (1-50)
    #[arg(short, long, default_value = "1")]
    level: i32,

    /// Caster class
    #[arg(short, long, default_value = "priest")]
    class: String,
}

#[derive(Args)]
struct ListArgs {
    #[arg(short, long, default_value = "crusade")]
    realm: String,

    #[command(flatten)]
    caster: CasterArgs,

    /// Also print each spell's description
    #[arg(long)]
    describe: bool,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CastArgs {
    #[arg(short, long, default_value = "crusade")]
    realm: String,

    /// Spell index within the realm
    #[arg(short, long)]
    spell: usize,

    #[command(flatten)]
    caster: CasterArgs,

    /// Keypad direction 1-9 (5 = current target); omit to decline aiming
    #[arg(short, long)]
    dir: Option<u8>,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BrandArgs {
    #[arg(short, long, default_value = "30")]
    level: i32,

    /// Menu key; omit to cancel
    #[arg(long)]
    choice: Option<char>,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct ImmuneArgs {
    #[arg(short, long, default_value = "20")]
    turns: i32,

    /// Menu key; omit to cancel
    #[arg(long)]
    choice: Option<char>,
}

#[derive(Args)]
struct StunArgs {
    #[arg(long)]
    value: i32,
}

#[derive(Serialize)]
struct SpellRow {
    index: usize,
    name: &'static str,
    info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
}

#[derive(Serialize)]
struct CastReport<'a> {
    spell: &'static str,
    outcome: CastOutcome,
    consumes_turn: bool,
    messages: &'a [String],
    effects: &'a [AppliedEffect],
    player: &'a Player,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = load_options(cli.config.as_ref(), cli.locale.as_deref())?;

    match cli.command {
        Command::List(args) => list(&args, &options),
        Command::Cast(args) => cast(&args, &options),
        Command::Brand(args) => brand(&args, &options),
        Command::Immune(args) => immune(&args, &options),
        Command::Stun(args) => stun(&args, &options),
    }
}

fn load_options(config: Option<&PathBuf>, locale: Option<&str>) -> Result<GameOptions> {
    let mut options = match config {
        Some(path) => GameOptions::load_from_file(path)
            .with_context(|| format!("reading options from {}", path.display()))?,
        None => GameOptions::default(),
    };

    if let Some(code) = locale {
        options.locale = Locale::from_code(code).with_context(|| format!("unknown locale '{code}'"))?;
    }
    Ok(options)
}

fn make_player(caster: &CasterArgs) -> Result<Player> {
    let class = PlayerClass::from_name(&caster.class)
        .with_context(|| format!("unknown class '{}'", caster.class))?;
    Ok(Player::new(class, caster.level))
}

fn make_rng(seed: Option<u64>) -> GameRng {
    seed.map_or_else(GameRng::from_entropy, GameRng::new)
}

fn list(args: &ListArgs, options: &GameOptions) -> Result<()> {
    let realm = Realm::from_name(&args.realm)?;
    let player = make_player(&args.caster)?;
    let locale = options.locale;

    let mut rows = Vec::with_capacity(realm.spell_count());
    for index in 0..realm.spell_count() {
        rows.push(SpellRow {
            index,
            name: spell_name(realm, index, locale)?,
            info: spell_info(realm, index, &player, locale)?,
            description: if args.describe {
                Some(spell_description(realm, index, locale)?)
            } else {
                None
            },
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{} ({} level {})",
        realm,
        player.class.title().get(locale),
        player.level
    );
    for row in &rows {
        println!("{:>2}) {:<24} {}", row.index, row.name, row.info);
        if let Some(desc) = row.description {
            println!("    {}", desc);
        }
    }
    Ok(())
}

fn cast(args: &CastArgs, options: &GameOptions) -> Result<()> {
    let realm = Realm::from_name(&args.realm)?;
    let mut player = make_player(&args.caster)?;
    let mut rng = make_rng(args.seed);
    let mut effects = EffectLog::new();
    let mut log = MessageLog::new();
    let mut input = match args.dir {
        Some(key) => {
            let dir = Direction::new(key).with_context(|| format!("invalid direction {key}"))?;
            ScriptedInput::with_dir(dir)
        }
        None => ScriptedInput::declining(),
    };

    let spell = spell_name(realm, args.spell, options.locale)?;
    let outcome = {
        let mut ctx = GameContext::new(
            &mut player,
            &mut rng,
            &mut effects,
            &mut input,
            &mut log,
            options,
        );
        cast_spell(realm, args.spell, &mut ctx)?
    };

    if args.json {
        let report = CastReport {
            spell,
            outcome,
            consumes_turn: outcome.consumes_turn(),
            messages: log.messages(),
            effects: &effects.applied,
            player: &player,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} -> {}", spell, outcome);
    for message in log.messages() {
        println!("  {}", message);
    }
    for effect in &effects.applied {
        println!("  * {}", effect);
    }
    if !outcome.consumes_turn() {
        println!("  (no turn used)");
    }
    Ok(())
}

fn brand(args: &BrandArgs, options: &GameOptions) -> Result<()> {
    let mut player = Player::new(PlayerClass::RedMage, args.level);
    let mut rng = make_rng(args.seed);
    let mut effects = EffectLog::new();
    let mut log = MessageLog::new();
    let mut input = args
        .choice
        .map_or_else(ScriptedInput::declining, ScriptedInput::with_choice);

    let picked = {
        let mut ctx = GameContext::new(
            &mut player,
            &mut rng,
            &mut effects,
            &mut input,
            &mut log,
            options,
        );
        choose_ele_attack(&mut ctx)
    };

    print_menu(&input, options);
    print_result(picked, player.brand.remaining(), &log);
    Ok(())
}

fn immune(args: &ImmuneArgs, options: &GameOptions) -> Result<()> {
    let mut player = Player::default();
    let mut rng = make_rng(None);
    let mut effects = EffectLog::new();
    let mut log = MessageLog::new();
    let mut input = args
        .choice
        .map_or_else(ScriptedInput::declining, ScriptedInput::with_choice);

    let picked = {
        let mut ctx = GameContext::new(
            &mut player,
            &mut rng,
            &mut effects,
            &mut input,
            &mut log,
            options,
        );
        choose_ele_immune(&mut ctx, args.turns)
    };

    print_menu(&input, options);
    print_result(picked, player.immunity.remaining(), &log);
    Ok(())
}

fn stun(args: &StunArgs, options: &GameOptions) -> Result<()> {
    if args.value < 0 {
        bail!("stun value must not be negative");
    }

    let mut stun = PlayerStun::default();
    stun.set(args.value);
    let (color, label) = stun.get_expr(options.locale);
    let label = if options.color {
        format!("{}{}\x1b[0m", color.ansi(), label)
    } else {
        label.to_string()
    };

    println!("value:           {}", stun.current());
    println!("rank:            {:?}", stun.get_rank());
    println!("status:          [{}]", label);
    println!("decrease chance: {}", stun.decrease_chance());
    println!("decrease damage: {}", stun.decrease_damage());
    Ok(())
}

fn print_menu(input: &ScriptedInput, options: &GameOptions) {
    for (prompt, entries) in &input.prompts {
        println!("{}", prompt);
        for entry in entries {
            if options.color {
                println!("  {}{}) {}\x1b[0m", entry.color.ansi(), entry.key, entry.label);
            } else {
                println!("  {}) {}", entry.key, entry.label);
            }
        }
    }
}

fn print_result(picked: Option<ElementKind>, remaining: i32, log: &MessageLog) {
    for message in log.messages() {
        println!("{}", message);
    }
    if let Some(kind) = picked {
        println!("{} for {} turns", kind, remaining);
    }
}
