use crate::commands::helpers::product_by_code;
use crate::commands::CmdResult;
use crate::contact::whatsapp_link;
use crate::error::Result;
use crate::store::Catalog;

pub fn run(catalog: &Catalog, recipient: &str, code: &str) -> Result<CmdResult> {
    let product = product_by_code(catalog, code)?;
    Ok(CmdResult::default().with_contact_link(whatsapp_link(product, recipient)))
}
