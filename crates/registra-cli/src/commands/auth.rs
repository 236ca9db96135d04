//! Session and account commands.

use anyhow::{Context, Result};

use registra_core::services::auth::{AuthService, NewUser, ProfileUpdate};

use crate::cli::{ChangePasswordArgs, LoginArgs, RegisterArgs, UpdateProfileArgs};
use crate::commands::Ctx;
use crate::output;

pub async fn login(ctx: &mut Ctx, args: LoginArgs) -> Result<()> {
    let user = ctx
        .manager
        .sign_in(&args.username, &args.password)
        .await
        .context("Failed to sign in")?;

    // Remember the username for the next session's login form.
    ctx.config.last_username = Some(args.username);
    if let Err(e) = ctx.config.save() {
        tracing::warn!(error = %e, "Failed to save config");
    }

    output::success("Signed in");
    output::field("user", &user.name);
    output::field("role", &user.role);
    Ok(())
}

pub fn logout(ctx: &mut Ctx) -> Result<()> {
    ctx.manager.sign_out().context("Failed to sign out")?;
    output::success("Signed out");
    Ok(())
}

pub async fn register(ctx: &Ctx, args: RegisterArgs) -> Result<()> {
    let new_user = NewUser {
        name: args.name,
        email: args.email,
        username: args.username,
        password: args.password,
    };
    let user = ctx
        .manager
        .register(&new_user, &args.confirm)
        .await
        .context("Failed to register")?;

    output::success("Account created, sign in to use it");
    output::field("username", &user.username);
    Ok(())
}

pub async fn whoami(ctx: &Ctx) -> Result<()> {
    let auth = AuthService::new(ctx.client.clone());
    let user = auth.current_user().await.context("Failed to fetch profile")?;
    output::json_pretty(&user)
}

pub async fn change_password(ctx: &Ctx, args: ChangePasswordArgs) -> Result<()> {
    let auth = AuthService::new(ctx.client.clone());
    auth.change_password(&args.current, &args.new)
        .await
        .context("Failed to change password")?;
    output::success("Password changed");
    Ok(())
}

pub async fn update_profile(ctx: &Ctx, args: UpdateProfileArgs) -> Result<()> {
    let update = ProfileUpdate {
        name: args.name,
        email: args.email,
    };
    let auth = AuthService::new(ctx.client.clone());
    let user = auth
        .update_profile(&update)
        .await
        .context("Failed to update profile")?;
    output::json_pretty(&user)
}
