//! User management screens.

use clap::Subcommand;

use shopdesk_admin::AdminClient;
use shopdesk_core::{UserId, UserRole};

use super::print_json;

#[derive(Subcommand)]
pub enum UserAction {
    /// List users
    List {
        /// Filter by role (admin, vendor, customer)
        #[arg(long)]
        role: Option<String>,

        /// Search by name or email
        #[arg(long)]
        search: Option<String>,

        /// Page number
        #[arg(long)]
        page: Option<u32>,
    },
    /// Flip a user's active flag
    Toggle {
        /// User ID
        id: i64,
    },
    /// Assign a role to a user
    ChangeRole {
        /// User ID
        id: i64,

        /// New role (admin, vendor, customer)
        role: String,
    },
}

pub async fn run(
    client: &AdminClient,
    action: UserAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        UserAction::List { role, search, page } => {
            let role = role.as_deref().map(str::parse::<UserRole>).transpose()?;
            let users = client.list_users(role, search.as_deref(), page).await?;
            print_json(&users)
        }
        UserAction::Toggle { id } => {
            let user = client.toggle_user_status(UserId::new(id)).await?;
            eprintln!(
                "{} is now {}",
                user.email,
                if user.is_active { "active" } else { "inactive" }
            );
            Ok(())
        }
        UserAction::ChangeRole { id, role } => {
            let role: UserRole = role.parse()?;
            let user = client.change_user_role(UserId::new(id), role).await?;
            print_json(&user)
        }
    }
}
