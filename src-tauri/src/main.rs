// OmniWork - Productivity dashboard with a context-aware AI assistant
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod assistant;
mod commands;
mod config;
mod error;
mod models;
mod seed;
mod services;
mod workspace;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "omniwork=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OmniWork application");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::get_view,
            commands::set_view,
            commands::get_dashboard,
            commands::get_mail_pane,
            commands::connect_mailbox,
            commands::set_mail_tab,
            commands::select_email,
            commands::list_emails,
            commands::list_events,
            commands::create_note,
            commands::list_notes,
            commands::update_note,
            commands::delete_note,
            commands::search_notes,
            commands::select_note,
            commands::get_selected_note,
            commands::list_chat_messages,
            commands::get_chat_state,
            commands::send_chat_message,
            commands::reset_chat,
            commands::get_recorder_status,
            commands::start_recording,
            commands::push_audio_chunk,
            commands::stop_recording,
            commands::cancel_recording,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
