pub mod bookings;
pub mod vehicles;

use std::sync::Arc;

use lease_kernel::settings::Settings;
use lease_kernel::ModuleRegistry;
use lease_store::DocumentStore;

/// Register all feature modules with the registry. The catalog goes first so
/// its seed data is in place before bookings start resolving vehicles.
pub fn register_all(registry: &mut ModuleRegistry, settings: &Settings, store: Arc<DocumentStore>) {
    registry.register(vehicles::create_module(
        store.clone(),
        settings.catalog.page_size,
    ));
    registry.register(bookings::create_module(store, settings.whatsapp.clone()));
}
