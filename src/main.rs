#![forbid(unsafe_code)]

//! arcade-designer - command-line front end for the controller designer
//!
//! Each invocation loads the working document, applies one command and
//! writes the working document back.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use arcade_designer::catalog::{self, palette};
use arcade_designer::color;
use arcade_designer::config::{Settings, bootstrap_level};
use arcade_designer::document::{ButtonConfig, ButtonRole, ButtonType, ControllerConfig};
use arcade_designer::editor::{Editor, EditorAction};
use arcade_designer::export::{self, ExportFormat};
use arcade_designer::mutators::ButtonKind;
use arcade_designer::persistence::WorkingSession;
use arcade_designer::pricing::format_price;
use arcade_designer::render::encode::export_image;
use arcade_designer::store::JsonFileStore;

#[derive(Parser)]
#[command(name = "arcade-designer")]
#[command(about = "Design arcade controller layouts, price them, save and export them")]
#[command(version)]
struct Cli {
    /// Saved-documents file (overrides settings)
    #[arg(long, global = true, env = "ARCADE_DESIGNER_STORE")]
    store: Option<PathBuf>,

    /// Working document file (overrides settings)
    #[arg(long, global = true, env = "ARCADE_DESIGNER_WORKING")]
    working: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start over from the default controller
    New,

    /// Print the working document
    Show {
        /// Print the full document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the current price
    Price,

    /// Add a button near the case center and select it
    Add {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Move a button (coordinates are clamped to the case)
    Move { id: String, x: f64, y: f64 },

    /// Edit fields of a button (defaults to the selected button)
    Update {
        #[arg(long)]
        id: Option<String>,
        /// Palette name or hex value
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        label: Option<String>,
        #[arg(long, value_enum)]
        shape: Option<ShapeArg>,
        #[arg(long)]
        size: Option<f64>,
        #[arg(long, requires = "y")]
        x: Option<f64>,
        #[arg(long, requires = "x")]
        y: Option<f64>,
    },

    /// Delete a button (defaults to the selected button)
    Delete { id: Option<String> },

    /// Select a button, or clear the selection when no id is given
    Select { id: Option<String> },

    /// Rename the working document
    Rename { name: String },

    /// Set the case color (palette name or hex value)
    CaseColor { color: String },

    /// Apply a layout preset
    #[command(subcommand)]
    Layout(LayoutCommands),

    /// List layout presets, palettes and button shapes
    Layouts,

    /// Save the working document to the saved collection
    Save {
        #[arg(long)]
        name: Option<String>,
    },

    /// List saved documents
    Saved,

    /// Replace the working document with a saved one
    Load { id: String },

    /// Delete a saved document
    Forget { id: String },

    /// Import a JSON document into the saved collection
    Import { path: PathBuf },

    /// Export the working document
    Export {
        #[arg(value_enum)]
        format: FormatArg,
        /// Output directory (defaults to the settings export dir)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pixels per case unit for image exports
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
    },
}

#[derive(Subcommand)]
enum LayoutCommands {
    /// Replace every button with a full layout
    Full { id: String },
    /// Swap the directional buttons
    Joystick { id: String },
    /// Swap the action buttons
    Action { id: String },
    /// Swap the option buttons
    Option { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Directional,
    Joystick,
    Action,
    Option,
}

impl From<KindArg> for ButtonKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Directional => ButtonKind::Directional,
            KindArg::Joystick => ButtonKind::Joystick,
            KindArg::Action => ButtonKind::Action,
            KindArg::Option => ButtonKind::Option,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    Button,
    Joystick,
    Dpad,
}

impl From<ShapeArg> for ButtonType {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Button => ButtonType::Button,
            ShapeArg::Joystick => ButtonType::Joystick,
            ShapeArg::Dpad => ButtonType::Dpad,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Png,
    #[value(name = "jpg", alias = "jpeg")]
    Jpeg,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Jpeg => ExportFormat::Jpeg,
        }
    }
}

/// Palette name or hex value to the stored `#rrggbb` form
fn resolve_color(input: &str, palette: &[palette::ColorOption]) -> Result<String> {
    if let Some(value) = palette::lookup(palette, input) {
        return Ok(value.to_string());
    }
    color::normalize(input).with_context(|| format!("Invalid color '{input}' (use a palette name or #rrggbb)"))
}

/// Expand a unique id prefix to the full button id. Unmatched input is passed
/// through so the mutator treats it as an unknown id.
fn resolve_button(doc: &ControllerConfig, given: &str) -> String {
    if doc.contains_button(given) {
        return given.to_string();
    }
    let mut matches = doc.buttons.iter().filter(|b| b.id.starts_with(given));
    match (matches.next(), matches.next()) {
        (Some(button), None) => button.id.clone(),
        (Some(_), Some(_)) => {
            warn!(prefix = %given, "Ambiguous button id prefix");
            given.to_string()
        }
        _ => {
            warn!(id = %given, "No button with that id");
            given.to_string()
        }
    }
}

fn target_button<S: arcade_designer::DocumentStore>(editor: &Editor<S>, id: Option<&str>) -> Result<String> {
    match id {
        Some(id) => Ok(resolve_button(editor.document(), id)),
        None => editor
            .selected()
            .map(str::to_string)
            .context("No button id given and no button selected"),
    }
}

fn role_flags(button: &ButtonConfig) -> String {
    let flags: Vec<_> = ButtonRole::ALL
        .iter()
        .filter(|r| button.has_role(**r))
        .map(|r| r.as_str())
        .collect();
    if flags.is_empty() { "ungrouped".to_string() } else { flags.join("+") }
}

fn print_button(button: &ButtonConfig, selected: Option<&str>) {
    let marker = if selected == Some(button.id.as_str()) { "*" } else { " " };
    println!(
        "  {marker} {:<8} {:<10} {:<9} ({:>6.1}, {:>6.1}) size {:<4} {}  [{}]",
        button.id.chars().take(8).collect::<String>(),
        button.label,
        button.button_type.as_str(),
        button.x,
        button.y,
        button.size,
        button.color,
        role_flags(button),
    );
}

fn print_document(doc: &ControllerConfig, selected: Option<&str>) {
    println!("{} ({})", doc.name, if doc.is_unsaved() { "unsaved" } else { doc.id.as_str() });
    println!("  case {} {}x{}, price {}", doc.case_color, doc.width, doc.height, format_price(doc.price));
    for role in ButtonRole::ALL {
        let layout = doc.layout_id(role).unwrap_or("-");
        println!("{} buttons (layout {layout}):", role.as_str());
        for button in doc.buttons_with_role(role) {
            print_button(button, selected);
        }
    }
    let ungrouped = doc.ungrouped_buttons();
    if !ungrouped.is_empty() {
        println!("ungrouped buttons:");
        for button in ungrouped {
            print_button(button, selected);
        }
    }
}

fn print_catalog() {
    println!("full layouts:");
    for layout in catalog::FULL_LAYOUTS {
        println!("  {:<12} {:<28} {}", layout.id, layout.name, layout.description);
    }
    for role in ButtonRole::ALL {
        println!("{} layouts:", role.as_str());
        for layout in catalog::category_layouts(role) {
            println!("  {:<12} {:<28} {}", layout.id, layout.name, layout.description);
        }
    }
    println!("button colors:");
    for option in catalog::BUTTON_COLORS {
        println!("  {:<8} {}", option.name, option.value);
    }
    println!("case colors:");
    for option in catalog::CASE_COLORS {
        println!("  {:<8} {}", option.name, option.value);
    }
    println!("button shapes:");
    for option in catalog::BUTTON_TYPE_OPTIONS {
        println!("  {:<8} {}", option.name, option.value.as_str());
    }
}

fn execute(command: Commands, editor: &mut Editor<JsonFileStore>, settings: &Settings) -> Result<()> {
    match command {
        Commands::New => {
            editor.reset();
            print_document(editor.document(), editor.selected());
        }
        Commands::Show { json } => {
            if json {
                println!("{}", export::to_json_pretty(editor.document())?);
            } else {
                print_document(editor.document(), editor.selected());
            }
        }
        Commands::Price => println!("{}", format_price(editor.document().price)),
        Commands::Add { kind } => {
            editor.dispatch(EditorAction::AddButton(kind.into()));
            if let Some(button) = editor.selected_button() {
                println!("added {} ({})", button.label, button.id);
            }
        }
        Commands::Move { id, x, y } => {
            let id = resolve_button(editor.document(), &id);
            editor.dispatch(EditorAction::MoveButton { id, x, y });
        }
        Commands::Update { id, color, label, shape, size, x, y } => {
            let id = target_button(editor, id.as_deref())?;
            let Some(current) = editor.document().button(&id).cloned() else {
                warn!(id = %id, "No button with that id, nothing updated");
                return Ok(());
            };

            let mut updated = current.clone();
            if let Some(color) = color {
                updated.color = resolve_color(&color, catalog::BUTTON_COLORS)?;
            }
            if let Some(label) = label {
                updated.label = label.trim().to_string();
            }
            if let Some(shape) = shape {
                updated.button_type = shape.into();
            }
            if let Some(size) = size {
                if !(size.is_finite() && size > 0.0) {
                    bail!("Button size must be positive, got {size}");
                }
                updated.size = size;
            }
            if updated != current {
                editor.dispatch(EditorAction::UpdateButton(updated));
            }
            if let (Some(x), Some(y)) = (x, y) {
                editor.dispatch(EditorAction::MoveButton { id: id.clone(), x, y });
            }
            editor.dispatch(EditorAction::Select(Some(id)));
        }
        Commands::Delete { id } => {
            let id = target_button(editor, id.as_deref())?;
            editor.dispatch(EditorAction::DeleteButton(id));
        }
        Commands::Select { id } => {
            let id = id.map(|id| resolve_button(editor.document(), &id));
            editor.dispatch(EditorAction::Select(id));
        }
        Commands::Rename { name } => editor.dispatch(EditorAction::Rename(name)),
        Commands::CaseColor { color } => {
            let color = resolve_color(&color, catalog::CASE_COLORS)?;
            editor.dispatch(EditorAction::SetCaseColor(color));
        }
        Commands::Layout(layout) => {
            let action = match layout {
                LayoutCommands::Full { id } => EditorAction::ApplyFullLayout(id),
                LayoutCommands::Joystick { id } => {
                    EditorAction::ApplyCategoryLayout { role: ButtonRole::Directional, layout_id: id }
                }
                LayoutCommands::Action { id } => {
                    EditorAction::ApplyCategoryLayout { role: ButtonRole::Action, layout_id: id }
                }
                LayoutCommands::Option { id } => {
                    EditorAction::ApplyCategoryLayout { role: ButtonRole::Option, layout_id: id }
                }
            };
            editor.dispatch(action);
            print_document(editor.document(), editor.selected());
        }
        Commands::Layouts => print_catalog(),
        Commands::Save { name } => {
            let id = editor.save(name.as_deref())?;
            println!("saved {} ({id})", editor.document().name);
        }
        Commands::Saved => {
            let saved = editor.saved();
            if saved.is_empty() {
                println!("No saved configurations");
            }
            for entry in saved {
                println!(
                    "  {}  {:<28} {:>3} buttons  {}",
                    entry.id,
                    entry.name,
                    entry.button_count,
                    format_price(entry.price)
                );
            }
        }
        Commands::Load { id } => {
            editor.load_saved(&id)?;
            print_document(editor.document(), editor.selected());
        }
        Commands::Forget { id } => editor.delete_saved(&id)?,
        Commands::Import { path } => {
            let id = editor.import_file(&path)?;
            println!("imported as {id}");
        }
        Commands::Export { format, out, scale } => {
            let dir = out.unwrap_or_else(|| settings.export_dir.clone());
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create export directory {:?}", dir))?;
            let path = match ExportFormat::from(format) {
                ExportFormat::Json => export::write_json(editor.document(), &dir)?,
                raster => export_image(editor.document(), raster, &dir, scale, editor.selected())?,
            };
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, level) = Settings::load_logged(&Settings::path(), bootstrap_level(), std::io::stderr)
        .context("Failed to load settings")?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store_path = cli.store.clone().unwrap_or_else(|| settings.store_path());
    let working_path = cli.working.clone().unwrap_or_else(|| settings.working_path());
    info!(store = %store_path.display(), working = %working_path.display(), "Using storage paths");

    let session = WorkingSession::load(&working_path);
    let mut editor = Editor::from_session(session, JsonFileStore::new(store_path));

    execute(cli.command, &mut editor, &settings)?;

    editor.session().save(&working_path)
}
