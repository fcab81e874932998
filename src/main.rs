#![windows_subsystem = "windows"]
mod client;
mod error;
mod models;
mod state;
slint::include_modules!();

use std::env;
use std::rc::Rc;
use std::sync::Arc;

use slint::{Model, VecModel};

use crate::state::ViewState;

/// Requested avatar edge length in pixels, 2x the 40px display size.
const AVATAR_SIZE: u32 = 80;

fn main() -> anyhow::Result<()> {
    // Load .env variables
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let token: Option<String> = env::var("GITHUB_TOKEN")
        .ok()
        .filter(|t| !t.is_empty());

    // Shared HTTP client
    let http_client = client::build_client(token.as_deref())?;

    // Background tokio runtime for async HTTP
    let rt = Arc::new(tokio::runtime::Runtime::new()?);

    // Create the UI
    let app = AppWindow::new()?;

    // =============================================
    //  CALLBACK: fetch-requested (view activation)
    // =============================================
    {
        let app_weak = app.as_weak();
        let http_client = http_client.clone();
        let rt = rt.clone();

        app.on_fetch_requested(move || {
            let Some(app) = app_weak.upgrade() else { return };

            // One fetch in flight per view; ignore re-entrant triggers.
            if app.get_is_loading() {
                return;
            }
            apply_state(&app, ViewState::Loading);

            let app_weak = app_weak.clone();
            let http_client = http_client.clone();

            rt.spawn(async move {
                let result = client::fetch_users(&http_client).await;

                if let Err(e) = &result {
                    log::error!("User fetch failed: {e}");
                }

                // Rows render immediately with placeholders; thumbnails
                // fill in per row as each download finishes.
                let avatar_urls: Vec<String> = result
                    .as_ref()
                    .map(|users| users.iter().map(|u| u.avatar_url.clone()).collect())
                    .unwrap_or_default();

                let resolved = ViewState::resolved(result);
                let app_weak_apply = app_weak.clone();
                let _ = slint::invoke_from_event_loop(move || {
                    if let Some(app) = app_weak_apply.upgrade() {
                        apply_state(&app, resolved);
                    }
                });

                for (row, url) in avatar_urls.into_iter().enumerate() {
                    let http_client = http_client.clone();
                    let app_weak = app_weak.clone();

                    tokio::spawn(async move {
                        // On failure the row keeps its placeholder.
                        let Some((pixels, w, h)) =
                            client::download_avatar_pixels(&http_client, url, AVATAR_SIZE).await
                        else {
                            return;
                        };

                        let _ = slint::invoke_from_event_loop(move || {
                            let Some(app) = app_weak.upgrade() else { return };
                            let list = app.get_user_list();
                            if let Some(mut item) = list.row_data(row) {
                                let buf = slint::SharedPixelBuffer::<slint::Rgba8Pixel>::clone_from_slice(
                                    &pixels, w, h,
                                );
                                item.avatar = slint::Image::from_rgba8(buf);
                                list.set_row_data(row, item);
                            }
                        });
                    });
                }
            });
        });
    }

    // Trigger exactly one fetch for this view session
    app.invoke_fetch_requested();

    // Run the Slint event loop
    app.run()?;

    Ok(())
}

/// Pushes a presentation state into the window's properties.
fn apply_state(app: &AppWindow, state: ViewState) {
    match state {
        ViewState::Loading => {
            app.set_is_loading(true);
            app.set_error_message("".into());
            app.set_user_list(Rc::new(VecModel::default()).into());
        }
        ViewState::Loaded(users) => {
            let items: Vec<UserItem> = users
                .into_iter()
                .map(|user| UserItem {
                    login: user.login.into(),
                    avatar: slint::Image::default(),
                })
                .collect();
            app.set_user_list(Rc::new(VecModel::from(items)).into());
            app.set_error_message("".into());
            app.set_is_loading(false);
        }
        ViewState::Error(message) => {
            app.set_user_list(Rc::new(VecModel::default()).into());
            app.set_error_message(message.into());
            app.set_is_loading(false);
        }
    }
}
