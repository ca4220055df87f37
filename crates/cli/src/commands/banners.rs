//! Banner screens.

use clap::{Args, Subcommand};

use shopdesk_admin::AdminClient;
use shopdesk_admin::forms::BannerForm;
use shopdesk_core::BannerId;

use super::print_json;

#[derive(Subcommand)]
pub enum BannerAction {
    /// List banners
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
    },
    /// Create a banner
    Create {
        #[command(flatten)]
        fields: BannerFields,
    },
    /// Replace a banner
    Update {
        /// Banner ID
        id: i64,

        #[command(flatten)]
        fields: BannerFields,
    },
    /// Delete a banner
    Delete {
        /// Banner ID
        id: i64,
    },
    /// Flip a banner's active flag
    Toggle {
        /// Banner ID
        id: i64,
    },
}

#[derive(Args)]
pub struct BannerFields {
    /// Headline text
    #[arg(long)]
    title: String,

    /// Secondary text
    #[arg(long)]
    subtitle: Option<String>,

    /// Call-to-action label
    #[arg(long)]
    button_text: Option<String>,

    /// Where the call-to-action links
    #[arg(long)]
    target_url: Option<String>,

    /// Storefront slot: hero, middle or bottom
    #[arg(long)]
    position: String,

    /// Start inactive instead of active
    #[arg(long)]
    inactive: bool,

    /// Banner image URL
    #[arg(long)]
    image: String,
}

impl BannerFields {
    fn into_form(self) -> Result<BannerForm, Box<dyn std::error::Error>> {
        Ok(BannerForm {
            title: self.title,
            subtitle: self.subtitle,
            button_text: self.button_text,
            target_url: self.target_url,
            position: self.position.parse()?,
            is_active: !self.inactive,
            image: self.image,
        })
    }
}

pub async fn run(
    client: &AdminClient,
    action: BannerAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BannerAction::List { page } => {
            let banners = client.list_banners(page).await?;
            print_json(&banners)
        }
        BannerAction::Create { fields } => {
            let banner = client.create_banner(fields.into_form()?).await?;
            print_json(&banner)
        }
        BannerAction::Update { id, fields } => {
            let banner = client
                .update_banner(BannerId::new(id), fields.into_form()?)
                .await?;
            print_json(&banner)
        }
        BannerAction::Delete { id } => {
            client.delete_banner(BannerId::new(id)).await?;
            eprintln!("deleted");
            Ok(())
        }
        BannerAction::Toggle { id } => {
            let banner = client.toggle_banner_status(BannerId::new(id)).await?;
            eprintln!(
                "banner {} is now {}",
                banner.id,
                if banner.is_active { "active" } else { "inactive" }
            );
            Ok(())
        }
    }
}
