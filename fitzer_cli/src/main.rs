use clap::{Parser, Subcommand};
use fitzer_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitzer")]
#[command(about = "Personal fitness recommendations and budget diet plans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate BMI from height and weight
    Bmi {
        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Store height and weight in the profile and log the weight
        #[arg(long)]
        save: bool,
    },

    /// Show or edit the stored profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Recommend exercises for the stored profile
    Recommend {
        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a budget diet plan for the stored profile
    Diet {
        /// Daily budget (low, medium, high)
        #[arg(long)]
        budget: Option<BudgetTier>,

        /// Diet type (vegan, non-vegan)
        #[arg(long)]
        diet: Option<DietType>,

        /// Show the last generated plan instead of generating a new one
        #[arg(long, conflicts_with_all = ["budget", "diet"])]
        last: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign in locally
    Login {
        #[arg(long)]
        name: String,

        #[arg(long)]
        username: String,
    },

    /// Forget the signed-in account
    Logout,

    /// Weight history
    Weight {
        #[command(subcommand)]
        action: WeightAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored profile
    Show,

    /// Update one or more profile fields
    Set {
        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        gender: Option<Gender>,

        /// Body fat percentage
        #[arg(long)]
        body_fat: Option<f64>,

        /// Average hours of sleep per night
        #[arg(long)]
        sleep: Option<f64>,

        /// sedentary, light, moderate, active, very_active
        #[arg(long)]
        activity: Option<ActivityLevel>,

        /// lose_weight, maintain, gain_weight, build_muscle
        #[arg(long)]
        goal: Option<FitnessGoal>,

        /// Height in centimetres
        #[arg(long)]
        height: Option<f64>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
    },
}

#[derive(Subcommand)]
enum WeightAction {
    /// List recorded weights, oldest first
    History,

    /// Export recorded weights to a CSV file
    Export {
        /// Destination CSV path
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    fitzer_core::logging::init_with_level(&config.logging.level);

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let mut store = FileStore::new(&data_dir);

    match cli.command {
        Commands::Bmi {
            height,
            weight,
            save,
        } => cmd_bmi(&mut store, &data_dir, height, weight, save),
        Commands::Profile { action } => match action {
            ProfileAction::Show => cmd_profile_show(&store),
            ProfileAction::Set {
                age,
                gender,
                body_fat,
                sleep,
                activity,
                goal,
                height,
                weight,
            } => {
                let update = ProfileUpdate {
                    age,
                    gender,
                    body_fat_percentage: body_fat,
                    sleep_hours: sleep,
                    activity_level: activity,
                    fitness_goal: goal,
                    height_cm: height,
                    weight_kg: weight,
                };
                cmd_profile_set(&mut store, &data_dir, &update)
            }
        },
        Commands::Recommend { json } => cmd_recommend(&store, json),
        Commands::Diet {
            budget,
            diet,
            last,
            json,
        } => {
            if last {
                cmd_diet_last(&store, json)
            } else {
                let budget = budget.unwrap_or(config.diet.budget);
                let diet = diet.unwrap_or(config.diet.diet_type);
                cmd_diet(&mut store, budget, diet, json)
            }
        }
        Commands::Login { name, username } => cmd_login(&mut store, &name, &username),
        Commands::Logout => cmd_logout(&mut store),
        Commands::Weight { action } => match action {
            WeightAction::History => cmd_weight_history(&data_dir),
            WeightAction::Export { csv } => cmd_weight_export(&data_dir, &csv),
        },
    }
}

fn cmd_bmi(store: &mut FileStore, data_dir: &Path, height: f64, weight: f64, save: bool) -> Result<()> {
    let reading = compute_bmi(height, weight);
    if reading.category.is_none() {
        return Err(Error::InvalidProfile(
            "Please enter a valid height and weight".into(),
        ));
    }

    println!("BMI: {:.1}", reading.bmi);
    println!("Category: {}", reading.category_label());

    if save {
        let update = ProfileUpdate {
            height_cm: Some(height),
            weight_kg: Some(weight),
            ..ProfileUpdate::default()
        };
        save_profile_update(store, data_dir, &update)?;
        println!("\n✓ Saved to profile");
    }

    Ok(())
}

fn cmd_profile_show(store: &FileStore) -> Result<()> {
    let state = AppState::load(store)?;
    if let Some(account) = &state.account {
        println!("Signed in as {}", account.display_name());
        println!();
    }
    display_profile(&state.profile);
    Ok(())
}

fn cmd_profile_set(store: &mut FileStore, data_dir: &Path, update: &ProfileUpdate) -> Result<()> {
    if update.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }

    let profile = save_profile_update(store, data_dir, update)?;
    println!("✓ Profile updated\n");
    display_profile(&profile);
    Ok(())
}

/// Merge, validate and persist a profile change, logging any new weight
fn save_profile_update(store: &mut FileStore, data_dir: &Path, update: &ProfileUpdate) -> Result<UserProfile> {
    let _lock = store.lock()?;
    let mut state = AppState::load(store)?;

    let mut candidate = state.profile.clone();
    candidate.apply(update);
    candidate.validate()?;

    let profile = state.update_profile(store, update)?.clone();

    if let Some(weight) = update.weight_kg {
        let mut log = JsonlWeightLog::in_dir(data_dir);
        log.append(&WeightEntry::new(weight))?;
    }

    Ok(profile)
}

fn cmd_recommend(store: &FileStore, json: bool) -> Result<()> {
    let errors = get_default_catalog().validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Catalog("Invalid catalog".into()));
    }

    let state = AppState::load(store)?;
    let recommendation = recommend_exercises(&state.profile);

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    if let Some(reason) = recommendation.fallback_reason() {
        println!("Showing the default workout ({})\n", reason);
    }
    for (i, exercise) in recommendation.exercises().iter().enumerate() {
        display_exercise(i + 1, exercise);
    }

    Ok(())
}

fn cmd_diet(store: &mut FileStore, budget: BudgetTier, diet: DietType, json: bool) -> Result<()> {
    let _lock = store.lock()?;
    let mut state = AppState::load(store)?;
    let plan = generate_budget_diet(&state.profile, budget, diet);
    let saved = state.save_diet_plan(store, plan)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&saved.plan)?);
    } else {
        display_diet(&saved.plan);
    }
    Ok(())
}

fn cmd_diet_last(store: &FileStore, json: bool) -> Result<()> {
    let state = AppState::load(store)?;
    let Some(saved) = state.last_diet else {
        println!("No diet plan generated yet.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&saved)?);
    } else {
        println!("Generated {}\n", saved.generated_at.format("%Y-%m-%d %H:%M UTC"));
        display_diet(&saved.plan);
    }
    Ok(())
}

fn cmd_login(store: &mut FileStore, name: &str, username: &str) -> Result<()> {
    let _lock = store.lock()?;
    let mut state = AppState::load(store)?;
    let account = state.login(store, name, username)?;
    println!("✓ Welcome, {}!", account.display_name());
    Ok(())
}

fn cmd_logout(store: &mut FileStore) -> Result<()> {
    let _lock = store.lock()?;
    let mut state = AppState::load(store)?;
    if state.account.is_none() {
        println!("Not signed in.");
        return Ok(());
    }
    state.logout(store)?;
    println!("✓ Signed out");
    Ok(())
}

fn cmd_weight_history(data_dir: &Path) -> Result<()> {
    let log = JsonlWeightLog::in_dir(data_dir);
    let entries = read_weight_history(log.path())?;

    if entries.is_empty() {
        println!("No weights recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{}  {:>6.1} kg",
            entry.recorded_at.format("%Y-%m-%d %H:%M"),
            entry.weight_kg
        );
    }
    Ok(())
}

fn cmd_weight_export(data_dir: &Path, csv_path: &Path) -> Result<()> {
    let log = JsonlWeightLog::in_dir(data_dir);
    let count = export_weight_csv(log.path(), csv_path)?;

    println!("✓ Exported {} weight entries", count);
    println!("  CSV: {}", csv_path.display());
    Ok(())
}

fn display_profile(profile: &UserProfile) {
    println!("  Age:           {}", profile.age);
    println!("  Gender:        {}", profile.gender);
    println!("  Body fat:      {}%", profile.body_fat_percentage);
    println!("  Sleep:         {} hours", profile.sleep_hours);
    println!("  Activity:      {}", profile.activity_level);
    println!("  Goal:          {}", profile.fitness_goal);
    println!("  Height:        {} cm", profile.height_cm);
    println!("  Weight:        {} kg", profile.weight_kg);
    match profile.bmi_category {
        Some(category) => println!("  BMI:           {:.1} ({})", profile.bmi, category),
        None => println!("  BMI:           -"),
    }
}

fn display_exercise(index: usize, exercise: &RecommendedExercise) {
    println!("{}. {}", index, exercise.name);
    println!(
        "   {} | {} | {} intensity",
        exercise.body_part, exercise.equipment, exercise.intensity
    );
    println!(
        "   Sets: {}  Reps: {}  Rest: {}",
        exercise.sets, exercise.reps, exercise.rest
    );
    println!("   ~{} kcal, {}", exercise.calories, exercise.duration);
    println!("   ℹ {}", exercise.ai_insight);
    println!();
}

fn display_diet(plan: &BudgetDietPlan) {
    println!("╭─────────────────────────────────────────╮");
    println!(
        "│  {} {} DIET PLAN",
        plan.budget.label().to_uppercase(),
        plan.diet_type.as_str().to_uppercase()
    );
    println!("│  Up to ₹{}/day", plan.budget.daily_ceiling());
    println!("╰─────────────────────────────────────────╯");
    println!();
    for line in plan.lines() {
        println!("{}", line);
    }
}
