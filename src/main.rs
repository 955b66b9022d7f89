use anyhow::Result;
use tracing_subscriber::EnvFilter;

use coffee_authoring_tool::{
    config::Config,
    controller::{
        IngredientController, IngredientScreen, MachineController, MachineScreen,
        RecipeController, RecipeScreen, UserController, UserScreen,
    },
    db::{self, IngredientStore, MachineStore, RecipeStore, SettingsProfileStore, UserStore},
    services::SettingsApplier,
    view::{EventQueue, ViewRoot},
};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coffee_authoring_tool=info")),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    tracing::info!("Opening authoring tool store at {}", config.database_url);

    let pool = db::init_db_pool(&config.database_url, config.max_connections).await?;
    if config.seed_database {
        db::seed_settings_profiles(&pool).await?;
    }

    let mut root = ViewRoot::new();
    let mut queue = EventQueue::new();
    let applier = SettingsApplier::new(SettingsProfileStore::new(pool.clone()));
    applier.apply_current_settings(&mut queue).await?;
    queue.run_pending(&mut root);
    tracing::info!(
        "Applied current settings: {:?} {}",
        root.stylesheets,
        root.style
    );

    let users = UserController::initialize(UserScreen::new(UserStore::new(pool.clone()))).await;
    report("Users", users.table_view().len(), users.message_field().text());

    let recipes =
        RecipeController::initialize(RecipeScreen::new(RecipeStore::new(pool.clone()))).await;
    report("Recipes", recipes.table_view().len(), recipes.message_field().text());

    let ingredients =
        IngredientController::initialize(IngredientScreen::new(IngredientStore::new(pool.clone())))
            .await;
    report(
        "Ingredients",
        ingredients.table_view().len(),
        ingredients.message_field().text(),
    );

    let machines =
        MachineController::initialize(MachineScreen::new(MachineStore::new(pool.clone()))).await;
    report("Machines", machines.table_view().len(), machines.message_field().text());

    pool.close().await;
    Ok(())
}

fn report(screen: &str, rows: usize, message: Option<&str>) {
    match message {
        Some(message) => tracing::info!("{}: {} rows ({})", screen, rows, message),
        None => tracing::info!("{}: {} rows", screen, rows),
    }
}
