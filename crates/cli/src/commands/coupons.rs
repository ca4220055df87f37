//! Coupon screens.

use clap::{Args, Subcommand};
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use shopdesk_admin::AdminClient;
use shopdesk_admin::forms::CouponForm;
use shopdesk_core::{CategoryId, CouponId, ProductId};

use super::print_json;

#[derive(Subcommand)]
pub enum CouponAction {
    /// List coupons
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one coupon
    Show {
        /// Coupon ID
        id: i64,
    },
    /// Create a coupon
    Create {
        #[command(flatten)]
        fields: CouponFields,
    },
    /// Replace a coupon
    Update {
        /// Coupon ID
        id: i64,

        #[command(flatten)]
        fields: CouponFields,
    },
    /// Delete a coupon
    Delete {
        /// Coupon ID
        id: i64,
    },
    /// Ask the backend whether a code applies to a cart total
    Validate {
        /// Coupon code
        code: String,

        /// Cart total to validate against
        #[arg(long)]
        cart_total: Decimal,
    },
}

#[derive(Args)]
pub struct CouponFields {
    /// Coupon code (normalized to uppercase)
    #[arg(long)]
    code: String,

    /// Discount type: percent or flat
    #[arg(long)]
    discount_type: String,

    /// Discount value (percentage or flat amount)
    #[arg(long)]
    discount_value: Decimal,

    /// Cap on the computed discount
    #[arg(long)]
    max_discount: Option<Decimal>,

    /// Minimum purchase amount
    #[arg(long, default_value = "0")]
    min_purchase: Decimal,

    /// First valid day (YYYY-MM-DD)
    #[arg(long)]
    valid_from: String,

    /// Last valid day, exclusive (YYYY-MM-DD)
    #[arg(long)]
    valid_to: String,

    /// Maximum number of redemptions
    #[arg(long, default_value_t = 1)]
    usage_limit: i64,

    /// Category IDs the coupon is limited to (repeatable)
    #[arg(long = "category")]
    categories: Vec<i64>,

    /// Product IDs the coupon is limited to (repeatable)
    #[arg(long = "product")]
    products: Vec<i64>,
}

impl CouponFields {
    fn into_form(self) -> Result<CouponForm, Box<dyn std::error::Error>> {
        Ok(CouponForm {
            code: self.code,
            discount_type: self.discount_type.parse()?,
            discount_value: self.discount_value,
            max_discount: self.max_discount,
            min_purchase: self.min_purchase,
            valid_from: parse_day(&self.valid_from)?,
            valid_to: parse_day(&self.valid_to)?,
            usage_limit: self.usage_limit,
            categories: self.categories.into_iter().map(CategoryId::new).collect(),
            products: self.products.into_iter().map(ProductId::new).collect(),
        })
    }
}

fn parse_day(raw: &str) -> Result<chrono::DateTime<Utc>, Box<dyn std::error::Error>> {
    let day: NaiveDate = raw.parse()?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("invalid date: {raw}"))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

pub async fn run(
    client: &AdminClient,
    action: CouponAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CouponAction::List { page } => {
            let coupons = client.list_coupons(page).await?;
            print_json(&coupons)
        }
        CouponAction::Show { id } => {
            let coupon = client.get_coupon(CouponId::new(id)).await?;
            print_json(&coupon)
        }
        CouponAction::Create { fields } => {
            let coupon = client.create_coupon(fields.into_form()?).await?;
            print_json(&coupon)
        }
        CouponAction::Update { id, fields } => {
            let coupon = client
                .update_coupon(CouponId::new(id), fields.into_form()?)
                .await?;
            print_json(&coupon)
        }
        CouponAction::Delete { id } => {
            client.delete_coupon(CouponId::new(id)).await?;
            eprintln!("deleted");
            Ok(())
        }
        CouponAction::Validate { code, cart_total } => {
            let verdict = client.validate_coupon(&code, cart_total).await?;
            print_json(&verdict)
        }
    }
}
