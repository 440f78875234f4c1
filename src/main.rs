use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dialoguer::{Input, Select};
use fertadvisor::api::{self, schema::RecommendResponse, ApiState};
use fertadvisor::app::{App, Screen};
use fertadvisor::batch::run_batch;
use fertadvisor::cli::{Cli, Commands};
use fertadvisor::config::{Config, FormDefaults};
use fertadvisor::error::AdvisorError;
use fertadvisor::i18n::{LabelTable, Locale, Translations};
use fertadvisor::logic::{parse_measurement, ReadingInput, RecommendationEngine};
use fertadvisor::models::{CropType, FieldProfile, Measurement, SoilReading, SoilType};
use fertadvisor::output;
use fertadvisor::ui::screens::{AdvisorField, AdvisorScreen, ModelsScreen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Config, labels and language resolved for one run.
struct Runtime {
    config: Config,
    translations: Translations,
    locale: Locale,
}

impl Runtime {
    fn load(config_path: Option<&PathBuf>, lang: Option<&str>) -> anyhow::Result<Self> {
        let config = Config::load(config_path).context("Configuration error")?;

        let locale = match lang {
            Some(code) => Locale::from_str(code)
                .ok_or_else(|| AdvisorError::UnknownCategory(format!("language '{}'", code)))?,
            None => config.display.language,
        };

        let translations = Translations::load(config.display.locales_dir.as_deref())?;

        Ok(Self {
            config,
            translations,
            locale,
        })
    }

    fn labels(&self) -> &LabelTable {
        self.translations.get(self.locale)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON output
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config_path = cli.config.as_ref();
    let lang = cli.lang.as_deref();

    match cli.command {
        None => {
            let runtime = Runtime::load(config_path, lang)?;
            run_tui(runtime)?;
        }
        Some(Commands::Recommend {
            nitrogen,
            phosphorous,
            potassium,
            temperature,
            humidity,
            moisture,
            soil,
            crop,
            json,
        }) => {
            let runtime = Runtime::load(config_path, lang)?;
            let input = ReadingInput {
                nitrogen: Some(nitrogen),
                phosphorous: Some(phosphorous),
                potassium: Some(potassium),
                temperature: Some(temperature),
                humidity: Some(humidity),
                moisture: Some(moisture),
            };
            let reading = input.validate()?;
            let profile = FieldProfile::new(soil, crop);
            print_recommendation(&runtime, &reading, &profile, json)?;
        }
        Some(Commands::Ask) => {
            let runtime = Runtime::load(config_path, lang)?;
            let (reading, profile) = prompt_reading(&runtime.config.defaults, runtime.labels())?;
            println!();
            print_recommendation(&runtime, &reading, &profile, false)?;
        }
        Some(Commands::Batch {
            file,
            output: destination,
        }) => {
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let outcomes = run_batch(&RecommendationEngine::new(), &input)?;
            let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
            let json = serde_json::to_string_pretty(&outcomes)?;

            match destination {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!(
                        "Wrote {} results ({} rejected) to {}",
                        outcomes.len(),
                        failed,
                        path.display()
                    );
                }
                None => println!("{}", json),
            }
        }
        Some(Commands::Rules) => {
            print!("{}", output::render_rules(&RecommendationEngine::new()));
        }
        Some(Commands::Models) => {
            let runtime = Runtime::load(config_path, lang)?;
            print!("{}", output::render_models(runtime.labels()));
        }
        Some(Commands::Serve { host, port }) => {
            let runtime = Runtime::load(config_path, lang)?;
            let mut server = runtime.config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            let state = ApiState::new(RecommendationEngine::new(), runtime.translations);
            api::serve(state, &server.bind_address()).await?;
        }
        Some(Commands::Init) => {
            Config::setup_interactive(config_path)?;
        }
        Some(Commands::Check) => {
            run_check(config_path)?;
        }
    }

    Ok(())
}

fn print_recommendation(
    runtime: &Runtime,
    reading: &SoilReading,
    profile: &FieldProfile,
    json: bool,
) -> anyhow::Result<()> {
    let engine = RecommendationEngine::new();
    let rec = engine.evaluate(reading, profile);

    if json {
        let response = RecommendResponse::from(rec);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let shown = runtime.translations.localize(runtime.locale, &rec);
        print!(
            "{}",
            output::render_recommendation(runtime.labels(), reading, profile, &shown)
        );
    }
    Ok(())
}

fn prompt_reading(
    defaults: &FormDefaults,
    labels: &LabelTable,
) -> fertadvisor::Result<(SoilReading, FieldProfile)> {
    let soils: Vec<&str> = SoilType::all().iter().map(|s| labels.soil(*s)).collect();
    let soil_default = SoilType::all()
        .iter()
        .position(|s| *s == defaults.soil_type)
        .unwrap_or(0);
    let soil_idx = Select::new()
        .with_prompt(labels.soil_type.as_str())
        .items(&soils)
        .default(soil_default)
        .interact()?;

    let crops: Vec<&str> = CropType::all().iter().map(|c| labels.crop(*c)).collect();
    let crop_default = CropType::all()
        .iter()
        .position(|c| *c == defaults.crop_type)
        .unwrap_or(0);
    let crop_idx = Select::new()
        .with_prompt(labels.crop_type.as_str())
        .items(&crops)
        .default(crop_default)
        .interact()?;

    let starting = defaults.reading_input();
    let mut input = ReadingInput::default();
    for measurement in Measurement::all() {
        let raw: String = Input::new()
            .with_prompt(labels.measurement(*measurement))
            .default(
                starting
                    .get(*measurement)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            )
            .validate_with(|value: &String| -> Result<(), String> {
                match parse_measurement(value) {
                    Some(v) if v.is_finite() && v >= 0.0 => Ok(()),
                    _ => Err(labels.invalid_input.clone()),
                }
            })
            .interact_text()?;
        input.set(*measurement, parse_measurement(&raw));
    }

    let reading = input.validate()?;
    let profile = FieldProfile::new(SoilType::all()[soil_idx], CropType::all()[crop_idx]);
    Ok((reading, profile))
}

fn run_check(config_path: Option<&PathBuf>) -> anyhow::Result<()> {
    match config_path.cloned().or_else(Config::find_config_path) {
        Some(path) => println!("Config:      {}", path.display()),
        None => println!("Config:      none found, using built-in defaults"),
    }

    let config = Config::load(config_path).context("Configuration error")?;
    println!("Language:    {}", config.display.language);
    println!(
        "Defaults:    {} / {}",
        config.defaults.soil_type, config.defaults.crop_type
    );
    println!("Server:      {}", config.server.bind_address());

    config
        .defaults
        .reading_input()
        .validate()
        .context("Form defaults are not a valid reading")?;

    let translations = Translations::load(config.display.locales_dir.as_deref())?;
    for locale in Locale::all() {
        let missing = translations.get(*locale).missing_labels();
        if missing.is_empty() {
            println!("Labels:      {} OK", locale);
        } else {
            println!("Labels:      {} missing {}", locale, missing.join(", "));
        }
    }

    let engine = RecommendationEngine::new();
    println!(
        "Engine:      {} rules, {} adjustments",
        engine.list_rules().len(),
        engine.list_adjustments().len()
    );

    Ok(())
}

fn run_tui(runtime: Runtime) -> anyhow::Result<()> {
    let Runtime {
        config,
        translations,
        locale,
    } = runtime;
    let mut app = App::new(config, translations, locale);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Advisor => {
                    let screen = AdvisorScreen::new(app.labels(), &app.advisor_state)
                        .with_result(app.last_result.as_ref(), app.localized_result())
                        .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Models => {
                    f.render_widget(ModelsScreen::new(app.labels()), area);
                }
            }
        })?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let editing = app.advisor_state.editing;
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('q') if !editing => {
                        app.quit();
                    }
                    KeyCode::Char('l') if !editing => {
                        app.cycle_language();
                    }
                    KeyCode::Char(c) if !editing => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Advisor => handle_advisor_input(app, code),
        Screen::Models => {
            if code == KeyCode::Esc {
                app.switch_screen(Screen::Advisor);
            }
        }
    }
}

fn handle_advisor_input(app: &mut App, code: KeyCode) {
    let state = &mut app.advisor_state;

    if state.editing {
        match code {
            KeyCode::Esc => state.cancel_editing(),
            KeyCode::Enter => state.finish_editing(),
            KeyCode::Tab => {
                state.finish_editing();
                state.next_field();
            }
            KeyCode::Backspace => {
                state.edit_buffer.pop();
            }
            KeyCode::Char(c) => state.edit_buffer.push(c),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Up | KeyCode::BackTab => state.prev_field(),
        KeyCode::Down | KeyCode::Tab => state.next_field(),
        KeyCode::Left => state.cycle_option(false),
        KeyCode::Right => state.cycle_option(true),
        KeyCode::Enter => match state.focused_field {
            AdvisorField::Soil | AdvisorField::Crop => state.cycle_option(true),
            AdvisorField::Submit => {
                app.submit();
            }
            _ => {
                state.start_editing();
            }
        },
        KeyCode::Char('r') => {
            app.submit();
        }
        KeyCode::Char('d') => app.reset_form(),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}
