//! Category screens.

use clap::Subcommand;

use shopdesk_admin::AdminClient;
use shopdesk_admin::types::{CategoryUpdate, NewCategory};
use shopdesk_core::CategoryId;

use super::print_json;

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List categories
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one category
    Show {
        /// Category ID
        id: i64,
    },
    /// Create a category
    Create {
        #[arg(long)]
        name: String,

        /// Parent category ID, for nested categories
        #[arg(long)]
        parent: Option<i64>,

        /// Ordering weight within a level
        #[arg(long, default_value_t = 0)]
        display_order: i64,

        /// Start inactive instead of active
        #[arg(long)]
        inactive: bool,

        /// Category image URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Update category fields
    Update {
        /// Category ID
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        parent: Option<i64>,

        #[arg(long)]
        display_order: Option<i64>,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,

        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a category
    Delete {
        /// Category ID
        id: i64,
    },
}

pub async fn run(
    client: &AdminClient,
    action: CategoryAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CategoryAction::List { page } => {
            let categories = client.list_categories(page).await?;
            print_json(&categories)
        }
        CategoryAction::Show { id } => {
            let category = client.get_category(CategoryId::new(id)).await?;
            print_json(&category)
        }
        CategoryAction::Create {
            name,
            parent,
            display_order,
            inactive,
            image,
        } => {
            let category = NewCategory {
                name,
                parent: parent.map(CategoryId::new),
                display_order,
                is_active: !inactive,
                image,
            };
            let created = client.create_category(&category).await?;
            print_json(&created)
        }
        CategoryAction::Update {
            id,
            name,
            parent,
            display_order,
            active,
            image,
        } => {
            let update = CategoryUpdate {
                name,
                parent: parent.map(CategoryId::new),
                display_order,
                is_active: active,
                image,
            };
            let updated = client.update_category(CategoryId::new(id), &update).await?;
            print_json(&updated)
        }
        CategoryAction::Delete { id } => {
            client.delete_category(CategoryId::new(id)).await?;
            eprintln!("deleted");
            Ok(())
        }
    }
}
