//! Scene termination: releasing injected layers and resetting the registry.

use crate::hooks::LayerHooks;
use crate::layer::LayerHost;
use crate::slot::{Slot, SlotId};
use std::fmt::Debug;

impl<L: Copy + Eq + Debug> LayerHooks<L> {
    /// Wraps the host's scene termination.
    ///
    /// Destroys the layer in every occupied slot, then empties all slots and
    /// all channels, then runs `original`. Empty slots are skipped, so a scene
    /// that never built some categories terminates the same way.
    ///
    /// Subscriptions do not outlive the scene: subscribe again for the next one.
    pub fn terminate<H, R, F>(&self, host: &mut H, original: F) -> R
    where
        H: LayerHost<Layer = L>,
        F: FnOnce(&mut H) -> R,
    {
        let registry = self.layers.registry();
        let mut destroyed = 0usize;
        for id in SlotId::ALL {
            if let Slot::Occupied(layer) = registry.take(id) {
                host.destroy_layer(layer, self.config.destroy_children);
                destroyed += 1;
            }
        }
        self.layers.clear();

        tracing::debug!(destroyed, "released injected layers");
        original(host)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::InterceptConfig;
    use crate::hooks::tests::RecordingHost;
    use crate::hooks::{HookInstaller, ScreenId};
    use crate::intercept::InterceptLayer;
    use crate::slot::{Category, SlotId};
    use pretty_assertions::assert_eq;

    #[test]
    fn terminate_destroys_occupied_slots_then_runs_original() {
        let layers = InterceptLayer::new();
        let hooks = HookInstaller::standard().install(layers.clone(), InterceptConfig::default());
        let mut host = RecordingHost::default();
        let title = [ScreenId::from("Title")];

        for category in Category::ALL {
            hooks.construct(&mut host, &title, 0, category, |_| ()).unwrap();
        }
        layers.on_create_background(|| Ok(()));
        assert_eq!(layers.registry().occupied().len(), 6);

        host.calls.clear();
        let result = hooks.terminate(&mut host, |host| {
            host.calls.push("original".to_string());
            7
        });

        assert_eq!(result, 7);
        assert_eq!(host.destroyed.len(), 6);
        assert!(host.destroyed.iter().all(|(_, children)| *children));
        assert_eq!(host.calls.last().map(String::as_str), Some("original"));
        for id in SlotId::ALL {
            assert_eq!(layers.registry().get(id), None);
        }
        assert_eq!(layers.hub().subscriber_count(Category::Background), 0);
    }

    #[test]
    fn terminate_with_nothing_built() {
        let layers = InterceptLayer::new();
        let hooks = HookInstaller::standard().install(layers.clone(), InterceptConfig::default());
        let mut host = RecordingHost::default();

        hooks.terminate(&mut host, |_| ());
        hooks.terminate(&mut host, |_| ());

        assert!(host.destroyed.is_empty());
        assert!(layers.registry().occupied().is_empty());
    }

    #[test]
    fn destroy_children_follows_config() {
        let layers = InterceptLayer::new();
        let hooks = HookInstaller::standard()
            .install(layers.clone(), InterceptConfig::new().destroy_children(false));
        let mut host = RecordingHost::default();

        hooks
            .construct(&mut host, &[ScreenId::from("Map")], 0, Category::Spriteset, |_| ())
            .unwrap();
        hooks.terminate(&mut host, |_| ());

        assert_eq!(host.destroyed, vec![(1, false), (2, false)]);
    }
}
