use neo_http::HttpAdapter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let connection = std::env::var("NEO_HTTP_CONNECTION")?;
    let mut adapter = HttpAdapter::build(&connection, None)?;

    // All queued queries travel in one transactional POST.
    adapter
        .on("neo4j")
        .query("CREATE (p:Person {name: 'Kit'})")
        .query("CREATE (p:Person {name: 'Sam'})")
        .query("MATCH (p:Person) RETURN p.name");

    let response = adapter.send().await?;
    println!("{response:#}");

    // The adapter resets after a successful send and can be reused.
    adapter.on("neo4j").query("MATCH (p:Person) DETACH DELETE p");
    adapter.send().await?;

    Ok(())
}
