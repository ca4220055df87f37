//! Login and logout.

use std::io::Read;

use secrecy::SecretString;
use shopdesk_admin::AdminClient;
use shopdesk_core::Email;

/// Sign in and persist the token pair.
///
/// The password comes from `SHOPDESK_PASSWORD`, or from stdin when
/// `--password-stdin` is given (e.g., `shopdesk login a@b.c
/// --password-stdin < pw.txt`).
pub async fn login(
    client: &AdminClient,
    email: &str,
    password_stdin: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email)?;

    let password = if password_stdin {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        SecretString::from(raw.trim_end_matches(['\r', '\n']).to_owned())
    } else {
        std::env::var("SHOPDESK_PASSWORD")
            .map(SecretString::from)
            .map_err(|_| "SHOPDESK_PASSWORD not set (or pass --password-stdin)")?
    };

    client.login(&email, &password).await?;
    eprintln!("signed in as {email}");
    Ok(())
}

/// Drop the persisted token pair.
pub async fn logout(client: &AdminClient) -> Result<(), Box<dyn std::error::Error>> {
    client.logout().await;
    eprintln!("signed out");
    Ok(())
}
