use interlayer::stage::{Director, Stage};
use interlayer::{Entity, InterceptLayer, StageConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn content(name: &'static str) -> impl FnMut(&mut Stage, Entity) + 'static {
    move |stage, root| {
        stage.spawn_child(root, name);
    }
}

/// Paints a vignette above the map sprites every time a map is built.
fn subscribe_vignette(layers: &InterceptLayer<Entity>) {
    let registry = layers.registry().clone();
    layers.on_create_spriteset(move || {
        let overlay = registry
            .after_spriteset()
            .ok_or_else(|| anyhow::anyhow!("sprite set overlay missing"))?;
        info!(?overlay, "vignette attached above sprites");
        Ok(())
    });
}

fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("interlayer=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    setup_tracing();

    let mut director = Director::with_standard_hooks(StageConfig::default());

    director.screen("Title", |screen| {
        screen.background(content("TitleBackground"));
        screen.foreground(content("TitleForeground"));
        screen.window_layer(content("WindowLayer"));
    });
    director
        .screen("Map", |screen| {
            screen.spriteset(content("Spriteset_Map"));
            screen.window_layer(content("WindowLayer"));
        })
        .on_enter(subscribe_vignette);
    director
        .screen("Item", |screen| {
            screen.background(content("MenuBackground"));
            screen.window_layer(content("WindowLayer"));
        })
        .base("MenuBase");

    for name in ["Title", "Map", "Item"] {
        director.switch_to(name)?;
        if let Some(root) = director.active_root() {
            info!(
                screen = name,
                children = ?director.stage().child_names(root),
                "screen constructed"
            );
        }
    }

    director.terminate();
    info!(
        live = director.stage().layer_count(),
        destroyed = director.stage().destroyed_count(),
        "all screens terminated"
    );
    Ok(())
}
