// ============================================================================
// PORTAL DE EMPRESAS - FRONTEND YEW (WASM)
// ============================================================================
// Capas:
// - Models: estructuras compartidas con la API
// - Services: SOLO comunicación HTTP + localStorage
// - ViewModels: lógica de login y CRUD (sin Yew)
// - Stores: estado de las vistas (Reducible)
// - Hooks / Components: Yew
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Punto de entrada del navegador
pub fn run() {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Portal de Empresas - API en {}", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
