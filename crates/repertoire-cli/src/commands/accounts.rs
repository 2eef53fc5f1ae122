use crate::commands::{print_json, Context};
use crate::error::CliError;
use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use repertoire_core::domain::{Dashboard, Role};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RoleArg {
    Admin,
    User,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::User => Role::User,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddAccountArgs {
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, value_enum, default_value_t = RoleArg::User)]
    pub role: RoleArg,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Serialize)]
struct LoginOutput<'a> {
    id: i64,
    numero_telephone: &'a str,
    role: Role,
    dashboard: Dashboard,
}

pub fn add_account(ctx: &Context<'_>, args: AddAccountArgs) -> Result<()> {
    let principal = ctx
        .store
        .accounts()
        .create(&args.phone, &args.password, args.role.into())
        .with_context(|| "create account")?;
    if ctx.json {
        print_json(&principal)?;
    } else {
        println!(
            "created account {} {} ({})",
            principal.id, principal.numero_telephone, principal.role
        );
    }
    Ok(())
}

pub fn login(ctx: &Context<'_>, args: LoginArgs) -> Result<()> {
    let principal = ctx
        .store
        .accounts()
        .authenticate(&args.phone, &args.password)
        .with_context(|| "authenticate")?
        .ok_or(CliError::AuthFailed)?;

    let dashboard = principal.landing_view();
    if ctx.json {
        print_json(&LoginOutput {
            id: principal.id,
            numero_telephone: &principal.numero_telephone,
            role: principal.role,
            dashboard,
        })?;
    } else {
        println!(
            "signed in as {} ({}), opening {} dashboard",
            principal.numero_telephone,
            principal.role,
            dashboard.title()
        );
    }
    Ok(())
}
