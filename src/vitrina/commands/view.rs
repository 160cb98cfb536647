use crate::commands::helpers::product_by_code;
use crate::commands::CmdResult;
use crate::display::DisplayProduct;
use crate::error::Result;
use crate::store::Catalog;

pub fn run(catalog: &Catalog, recipient: &str, code: &str) -> Result<CmdResult> {
    let product = product_by_code(catalog, code)?;
    let shown = DisplayProduct::new(product, recipient);
    let link = shown.contact_link.clone();
    Ok(CmdResult::default()
        .with_listed_products(vec![shown])
        .with_total(catalog.len())
        .with_contact_link(link))
}
