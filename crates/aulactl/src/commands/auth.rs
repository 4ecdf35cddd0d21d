//! Login, logout, and whoami.

use anyhow::Result;
use aula_client::api::AulaClient;
use aula_client::models::LoginCredentials;
use aula_client::state::AppState;
use aula_client::validate::{validate_form, LoginForm};

pub async fn cmd_login(client: &AulaClient, email: &str, password: &str) -> Result<()> {
    let form = LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    };
    if let Err(errors) = validate_form(&form) {
        for (field, message) in &errors {
            eprintln!("{}: {}", field, message);
        }
        anyhow::bail!("Invalid login form");
    }

    let state = AppState::from_session(client.session());
    state.set_loading(true);
    let result = client
        .auth()
        .login(&LoginCredentials {
            email: form.email,
            password: form.password,
        })
        .await;
    state.set_loading(false);

    let bundle = result?;
    state.set_user(Some(bundle.user.clone()));

    println!(
        "Signed in as {} <{}> ({})",
        bundle.user.full_name, bundle.user.email, bundle.user.role
    );
    Ok(())
}

pub fn cmd_logout(client: &AulaClient) -> Result<()> {
    client.auth().logout();
    println!("Signed out.");
    Ok(())
}

pub fn cmd_whoami(client: &AulaClient) -> Result<()> {
    match client.session().current_user() {
        Some(user) => {
            println!("User:   {} <{}>", user.full_name, user.email);
            println!("Role:   {}", user.role);
            println!("Active: {}", user.is_active);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
