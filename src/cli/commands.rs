//! Command handlers. Grounded file-for-file in
//! `examples/original_source/ward/{add,edit,del,copy,qr,list,master,init,
//! import,export}.go`, generalized to the distilled spec's key hierarchy
//! and multi-pattern `find`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::clipboard::copy_to_clipboard;
use crate::entropy::collect_user_entropy;
use crate::error::Error;
use crate::generator::{self, alphabet, Alphabet, Spec as GenSpec};
use crate::json_io;
use crate::qr::render_terminal;
use crate::rng::SecureEngine;
use crate::store::Store;
use crate::types::Credential;

use super::args::GenArgs;
use super::prompt::Prompt;

pub const DEFAULT_STRETCH: u32 = 100_000;

/// Open the store, retrying on a wrong or empty master password and
/// failing fast on anything else, matching `app.go`'s `openStore`.
fn open_store(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path) -> Result<Store> {
    loop {
        let master = prompt.read_password("Master password: ");
        match Store::open(path, &master) {
            Ok(store) => return Ok(store),
            Err(Error::IncorrectPassword) | Err(Error::InvalidPassword) => {
                prompt.print_error("Incorrect master password.");
                continue;
            }
            Err(err) => bail!(err),
        }
    }
}

pub fn init(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path, stretch: u32, link: Option<PathBuf>) -> Result<()> {
    if let Some(target) = link {
        std::os::unix::fs::symlink(&target, path)
            .with_context(|| format!("failed to link {} to {}", path.display(), target.display()))?;
        prompt.print_success(&format!("Linked {} to {}.", path.display(), target.display()));
        return Ok(());
    }

    let password = prompt.read_password_confirm("Master password");
    Store::create(path, &password, stretch)?.close()?;
    prompt.print_success(&format!("Created new credential database at {}.", path.display()));
    Ok(())
}

fn build_generator_spec(args: &GenArgs) -> GenSpec {
    let mut exclude = args.exclude.clone();
    if args.no_similar {
        exclude.push_str(alphabet::SIMILAR);
    }

    let mut alphabets = vec![
        Alphabet::new("upper", alphabet::UPPER, args.min_upper, args.max_upper),
        Alphabet::new("lower", alphabet::LOWER, args.min_lower, args.max_lower),
        Alphabet::new("digit", alphabet::DIGIT, args.min_digit, args.max_digit),
        Alphabet::new("symbol", alphabet::SYMBOL, args.min_symbol, args.max_symbol),
    ];
    if args.no_upper {
        alphabets[0].min = 0;
        alphabets[0].max = Some(0);
    }
    if args.no_lower {
        alphabets[1].min = 0;
        alphabets[1].max = Some(0);
    }
    if args.no_digit {
        alphabets[2].min = 0;
        alphabets[2].max = Some(0);
    }
    if args.no_symbol {
        alphabets[3].min = 0;
        alphabets[3].max = Some(0);
    }

    let (min_length, max_length) = match args.length {
        Some(l) => (l, l),
        None => (args.min_length, args.max_length),
    };

    GenSpec {
        alphabets,
        min_length,
        max_length,
        exclude,
    }
}

pub fn add(
    prompt: &mut Prompt<impl std::io::BufRead>,
    path: &Path,
    login: Option<String>,
    realm: Option<String>,
    note: Option<String>,
    no_copy: bool,
    gen: GenArgs,
) -> Result<()> {
    let mut store = open_store(prompt, path)?;

    if !gen.gen {
        let login = login.unwrap_or_else(|| prompt.read_input("Login: "));
        let password = prompt.read_password_confirm("Password");
        let realm = realm.unwrap_or_else(|| prompt.read_input("Realm: "));
        let note = note.unwrap_or_else(|| prompt.read_input("Note: "));

        store.add(&Credential::new(login, password.clone(), realm, note))?;
        prompt.print_success("Credential added.");
        finish_with_password(prompt, &password, !no_copy, "Password");
    } else {
        let spec = build_generator_spec(&gen);

        // `--paranoid` mixes a line of user-mashed keyboard noise into the
        // seed before the generator ever touches it; this must happen
        // before spawning the worker (it needs the foreground's prompt),
        // so it runs ahead of the login/realm/note collection below rather
        // than concurrently with it.
        let mut rng = if gen.paranoid {
            let mashed = prompt.read_input("Mash your keyboard, then press enter: ");
            SecureEngine::from_seed(collect_user_entropy(&mashed))
        } else {
            SecureEngine::from_os_rng()
        };

        // The password computes on a background thread while the
        // foreground collects the remaining fields, mirroring
        // add.go's passwordChan goroutine (§5).
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let result = generator::generate(&spec, &mut rng);
            let _ = tx.send(result);
        });

        let login = login.unwrap_or_else(|| prompt.read_input("Login: "));
        let realm = realm.unwrap_or_else(|| prompt.read_input("Realm: "));
        let note = note.unwrap_or_else(|| prompt.read_input("Note: "));

        let password = match rx.recv() {
            Ok(Ok(password)) => password,
            Ok(Err(err)) => {
                prompt.print_error(&err.to_string());
                return Ok(());
            }
            Err(_) => bail!("password generator thread disconnected"),
        };

        store.add(&Credential::new(login, password.clone(), realm, note))?;
        prompt.print_success("Credential added.");
        finish_with_password(prompt, &password, !no_copy, "Generated password");
    }

    store.close()?;
    Ok(())
}

fn finish_with_password(prompt: &Prompt<impl std::io::BufRead>, password: &str, copy: bool, label: &str) {
    if copy {
        match copy_to_clipboard(password) {
            Ok(()) => println!("{label} copied to the clipboard."),
            Err(err) => prompt.print_error(&format!("Could not copy to clipboard: {err}")),
        }
    } else {
        println!();
    }
}

pub fn copy(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path, query: &[String]) -> Result<()> {
    let store = open_store(prompt, path)?;
    if let Some(credential) = prompt.find_credential(&store, query) {
        copy_to_clipboard(&credential.password)?;
        prompt.print_success("Password copied to the clipboard.");
    }
    store.close()?;
    Ok(())
}

pub fn edit(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path, query: &[String]) -> Result<()> {
    let mut store = open_store(prompt, path)?;
    let Some(mut credential) = prompt.find_credential(&store, query) else {
        store.close()?;
        return Ok(());
    };

    let login = prompt.read_input(&format!("Login ({}): ", credential.login));
    if !login.is_empty() {
        credential.login = login;
    }

    if let Some(password) = prompt.read_edit_password_confirm() {
        credential.password = password;
    }

    let realm = prompt.read_input(&format!("Realm ({}): ", credential.realm));
    if !realm.is_empty() {
        credential.realm = realm;
    }

    let note = prompt.read_input(&format!("Note ({}): ", credential.note));
    if !note.is_empty() {
        credential.note = note;
    }

    store.update(&credential)?;
    prompt.print_success("Credential updated.");
    store.close()?;
    Ok(())
}

pub fn del(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path, query: &[String]) -> Result<()> {
    let mut store = open_store(prompt, path)?;
    if let Some(credential) = prompt.find_credential(&store, query) {
        let confirmed = prompt.read_yes_no(&format!("Delete \"{}\"?", credential.format()));
        if confirmed {
            store.delete(credential.id.expect("stored credential always has an id"))?;
            prompt.print_success("Credential deleted.");
        }
    }
    store.close()?;
    Ok(())
}

pub fn qr(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path, query: &[String]) -> Result<()> {
    let store = open_store(prompt, path)?;
    if let Some(credential) = prompt.find_credential(&store, query) {
        print!("{}", render_terminal(&credential.password)?);
    }
    store.close()?;
    Ok(())
}

pub fn list(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path) -> Result<()> {
    let store = open_store(prompt, path)?;
    let credentials = store.all()?;
    if credentials.is_empty() {
        println!("No credentials stored.");
    } else {
        for credential in &credentials {
            println!("{}", credential.format());
        }
    }
    store.close()?;
    Ok(())
}

pub fn import(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path, file: Option<PathBuf>) -> Result<()> {
    let mut store = open_store(prompt, path)?;
    let data = match file {
        Some(file) => std::fs::read_to_string(file)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let credentials = json_io::import_json(&data)?;
    for credential in &credentials {
        store.add(credential)?;
    }
    prompt.print_success(&format!("Imported {} credential(s).", credentials.len()));
    store.close()?;
    Ok(())
}

pub fn export(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path, file: Option<PathBuf>, compact: bool) -> Result<()> {
    let store = open_store(prompt, path)?;
    let credentials = store.all()?;
    let json = json_io::export_json(&credentials, compact)?;
    match file {
        Some(file) => std::fs::write(&file, json)?,
        None => println!("{json}"),
    }
    store.close()?;
    Ok(())
}

pub fn master(prompt: &mut Prompt<impl std::io::BufRead>, path: &Path, stretch: u32) -> Result<()> {
    let mut store = open_store(prompt, path)?;
    let new_password = prompt.read_password_confirm("New master password");
    store.rotate_master(&new_password, stretch)?;
    prompt.print_success("Master password updated.");
    store.close()?;
    Ok(())
}
