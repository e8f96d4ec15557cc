pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod navigation;
pub mod notifications;
pub mod operations;
pub mod portal;
pub mod session_store;
pub mod summary;
pub mod support;
pub mod utils;
pub mod voice;

#[cfg(feature = "desktop")]
mod shell {
    use std::sync::Arc;

    use tauri::Manager;

    use crate::{
        catalog::commands::{get_analytics, get_dashboard, get_search_results, get_sidebar},
        config::PortalConfig,
        events::SharedSink,
        navigation::commands::{
            close_login, close_sidebar, get_navigation_state, logout, navigate, show_login,
            submit_login, submit_search, toggle_sidebar,
        },
        portal::Portal,
        session_store::SessionStore,
        summary::commands::{
            generate_new_summary, generate_summary, get_document, get_summary_state,
            reset_summary,
        },
        support::commands::{get_chat_state, send_chat_message},
        voice::commands::{
            close_voice_search, get_voice_state, open_voice_search, retry_voice_search,
            voice_search_now,
        },
    };

    pub(crate) type AppState = Portal;

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        crate::utils::logging::init();

        log::info!("Smart Information Retrieval starting up...");

        tauri::Builder::default()
            .plugin(tauri_plugin_opener::init())
            .setup(|app| {
                let result = (|| -> anyhow::Result<()> {
                    let app_data_dir = app
                        .path()
                        .app_data_dir()
                        .map_err(|err| anyhow::anyhow!(err))?;
                    std::fs::create_dir_all(&app_data_dir)?;

                    let store = Arc::new(SessionStore::open(app_data_dir.join("session.json"))?);
                    let config = PortalConfig::from_env();
                    log::info!("Portal config: {config:?}");

                    let sink: SharedSink = Arc::new(app.handle().clone());

                    app.manage(Portal::new(store, &config, sink));

                    Ok(())
                })();

                result.map_err(|err| err.into())
            })
            .invoke_handler(tauri::generate_handler![
                get_navigation_state,
                navigate,
                toggle_sidebar,
                close_sidebar,
                show_login,
                close_login,
                submit_login,
                logout,
                submit_search,
                get_search_results,
                get_dashboard,
                get_analytics,
                get_sidebar,
                get_document,
                open_voice_search,
                retry_voice_search,
                close_voice_search,
                voice_search_now,
                get_voice_state,
                generate_summary,
                generate_new_summary,
                reset_summary,
                get_summary_state,
                send_chat_message,
                get_chat_state,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}

#[cfg(feature = "desktop")]
pub(crate) use shell::AppState;
#[cfg(feature = "desktop")]
pub use shell::run;
