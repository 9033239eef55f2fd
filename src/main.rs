#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    indictment_docs::run().await
}
