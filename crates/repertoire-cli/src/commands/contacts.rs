use crate::commands::{print_json, Context};
use crate::error::{failed, invalid_input, not_found};
use crate::util::parse_id;
use anyhow::{Context as _, Result};
use clap::{ArgAction, Args, ValueEnum};
use repertoire_core::domain::{Contact, ContactNew};
use repertoire_store::repo::SearchField;

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[arg(long)]
    pub nom: String,
    #[arg(long)]
    pub postnom: String,
    #[arg(long)]
    pub email: String,
    #[arg(long = "phone")]
    pub numero_telephone: String,
    #[arg(long)]
    pub genre: String,
    #[arg(long)]
    pub adresse: Option<String>,
    #[arg(long = "photo", default_value_t = 0)]
    pub photo_contact: i64,
    #[arg(long)]
    pub compte_id: Option<i64>,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    pub id: String,
    #[arg(long)]
    pub nom: Option<String>,
    #[arg(long)]
    pub postnom: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long = "phone")]
    pub numero_telephone: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub adresse: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "adresse")]
    pub clear_adresse: bool,
    #[arg(long = "photo")]
    pub photo_contact: Option<i64>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub compte_id: Option<i64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SearchFieldArg {
    Nom,
    Postnom,
}

impl From<SearchFieldArg> for SearchField {
    fn from(field: SearchFieldArg) -> Self {
        match field {
            SearchFieldArg::Nom => SearchField::Nom,
            SearchFieldArg::Postnom => SearchField::Postnom,
        }
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Matched against nom, postnom and phone; empty lists everything.
    #[arg(default_value = "")]
    pub term: String,
    /// Restrict the match to one column. The term must not be blank.
    #[arg(long, value_enum)]
    pub field: Option<SearchFieldArg>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
}

pub fn add_contact(ctx: &Context<'_>, args: AddContactArgs) -> Result<()> {
    let compte_id = args
        .compte_id
        .or(ctx.config.default_compte_id)
        .unwrap_or_default();
    let mut contact = Contact::new(ContactNew {
        nom: args.nom,
        postnom: args.postnom,
        email: args.email,
        numero_telephone: args.numero_telephone,
        genre: args.genre,
        adresse: args.adresse,
        photo_contact: args.photo_contact,
        compte_id,
    })?;

    let created = ctx
        .service
        .add(&mut contact)
        .with_context(|| "create contact")?;
    if !created {
        return Err(failed("the contact could not be saved"));
    }

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("created {}", contact);
    }
    Ok(())
}

pub fn edit_contact(ctx: &Context<'_>, args: EditContactArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    let mut contact = ctx
        .service
        .find_by_id(id)
        .with_context(|| "load contact")?
        .ok_or_else(|| not_found("contact not found"))?;

    let mut changed = false;
    if let Some(nom) = args.nom {
        contact.set_nom(&nom)?;
        changed = true;
    }
    if let Some(postnom) = args.postnom {
        contact.set_postnom(&postnom)?;
        changed = true;
    }
    if let Some(email) = args.email {
        contact.set_email(&email)?;
        changed = true;
    }
    if let Some(numero_telephone) = args.numero_telephone {
        contact.set_numero_telephone(&numero_telephone)?;
        changed = true;
    }
    if let Some(genre) = args.genre {
        contact.set_genre(&genre)?;
        changed = true;
    }
    if let Some(adresse) = args.adresse {
        contact.set_adresse(Some(&adresse));
        changed = true;
    }
    if args.clear_adresse {
        contact.set_adresse(None);
        changed = true;
    }
    if let Some(photo_contact) = args.photo_contact {
        contact.set_photo_contact(photo_contact)?;
        changed = true;
    }

    if !changed {
        return Err(invalid_input("no updates provided"));
    }

    let updated = ctx
        .service
        .update(&contact)
        .with_context(|| "update contact")?;
    if !updated {
        return Err(failed("the contact could not be updated"));
    }

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("updated {}", contact);
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    let contact = ctx
        .service
        .find_by_id(id)
        .with_context(|| "load contact")?
        .ok_or_else(|| not_found("contact not found"))?;

    if ctx.json {
        return print_json(&contact);
    }

    println!("id: {}", contact.id());
    println!("nom: {}", contact.nom());
    println!("postnom: {}", contact.postnom());
    println!("email: {}", contact.email());
    println!("phone: {}", contact.numero_telephone());
    println!("genre: {}", contact.genre());
    if let Some(adresse) = contact.adresse() {
        println!("adresse: {}", adresse);
    }
    if contact.photo_contact() > 0 {
        println!("photo: {}", contact.photo_contact());
    }
    if contact.compte_id() > 0 {
        println!("compte_id: {}", contact.compte_id());
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let contacts = match args.compte_id {
        Some(compte_id) => ctx.service.list_for_compte(compte_id),
        None => ctx.service.get_all(),
    }
    .with_context(|| "list contacts")?;
    print_contacts(ctx, &contacts)
}

pub fn search_contacts(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let contacts = match args.field {
        Some(field) => ctx.service.search_by(field.into(), &args.term),
        None => ctx.service.search(&args.term),
    }
    .with_context(|| "search contacts")?;
    print_contacts(ctx, &contacts)
}

pub fn delete_contact(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    let deleted = ctx
        .service
        .delete(id)
        .with_context(|| "delete contact")?;
    if !deleted {
        return Err(not_found("contact not found"));
    }
    if ctx.json {
        print_json(&serde_json::json!({ "deleted": id }))?;
    } else {
        println!("deleted {}", id);
    }
    Ok(())
}

fn print_contacts(ctx: &Context<'_>, contacts: &[Contact]) -> Result<()> {
    if ctx.json {
        return print_json(&contacts);
    }
    if contacts.is_empty() {
        println!("no contacts");
        return Ok(());
    }
    for contact in contacts {
        println!("{}  {}", contact, contact.email());
    }
    Ok(())
}
