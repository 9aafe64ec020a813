//! Pattern 8: A Tour of the Type System
//! Aliases, records, traits as protocols, generics, overloads, narrowing,
//! generators, async streams, scoped resources and fluent methods.
//!
//! Run with: cargo run --bin p8_typing_tour

use anyhow::{Context, Result};
use design_patterns::typing::aliases::{
    describe_user, find_user, open_path, run_sql, IoMode, ServerConfig, UserId, MAX_ITEMS, PI,
};
use design_patterns::typing::fluent::Person;
use design_patterns::typing::generators::{
    count, count_stream, double, flatten, multiply, Echo, EchoStep, ResourceTracker,
};
use design_patterns::typing::generics::{first, logged, map_all, minimum, Crate, ValueBox};
use design_patterns::typing::narrowing::{as_text, paint, process_event, Color};
use design_patterns::typing::overloads::load;
use design_patterns::typing::protocols::{len_of_any, persist, size_of, Document};
use design_patterns::typing::records::{authenticate, record_score, Credentials, Score};
use design_patterns::{console, logging};
use futures::StreamExt;
use serde_json::json;
use std::path::Path;

fn aliases() -> Result<()> {
    console::section("Constants, Aliases, Newtypes");
    println!("  MAX_ITEMS={MAX_ITEMS} PI={PI:.5}");
    println!("  {}", describe_user(UserId(3243434312)));
    if let Some(user) = find_user("joao") {
        println!("  found {}", user.to_uppercase());
    }
    let mode: IoMode = "rb".parse()?;
    println!("  {}", open_path("/tmp/data.bin", mode));
    println!(
        "  {} (default timeout {}s)",
        ServerConfig::new("localhost").host,
        ServerConfig::DEFAULT_TIMEOUT
    );
    println!("  {}", run_sql("SELECT 1"));
    Ok(())
}

fn records() -> Result<()> {
    console::section("Typed Records and Validated Values");
    let creds = Credentials::from_json(r#"{"user": "x", "password": "y", "remember_me": true}"#)?;
    println!("  authenticated: {}", authenticate(&creds));
    if let Err(err) = Credentials::from_json(r#"{"user": "x"}"#) {
        println!("  rejected: {err}");
    }
    println!("  {}", record_score(Score::try_from(87i64)?));
    if let Err(err) = Score::try_from(150i64) {
        println!("  rejected: {err}");
    }
    Ok(())
}

fn protocols() {
    console::section("Traits as Protocols");
    println!("  size_of(\"abc\") = {}", size_of("abc"));
    println!("  size_of(vec) = {}", size_of(&vec![1, 2, 3, 4]));
    println!("  runtime check on u32: {:?}", len_of_any(&7u32));
    println!("  {}", persist(&Document::new("/tmp/file.txt")));
}

fn generics() {
    console::section("Generics");
    let seq = Crate::new(vec![10, 20, 30]);
    println!("  first of seq: {:?}", first(seq.as_slice()));
    println!("  map_all: {:?}", map_all(|z| z * 10, [1, 2, 3]));
    println!("  minimum: {}", minimum("pear", "apple"));
    println!("  boxed: {}", ValueBox::new(PI).get());

    let add = logged("add", |(a, b): (i32, i32)| a + b);
    println!("  logged add: {}", add((2, 3)));
}

fn overloads() -> Result<()> {
    console::section("Overloaded Load");
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(file!());
    let bytes: Vec<u8> = load(&path).with_context(|| format!("reading {}", path.display()))?;
    let text: String = load(&path)?;
    println!("  {} bytes, {} lines", bytes.len(), text.lines().count());
    Ok(())
}

fn narrowing() -> Result<()> {
    console::section("Exhaustive Matches and Narrowing");
    for name in ["red", "green", "blue"] {
        let color: Color = name.parse()?;
        println!("  {}", paint(color));
    }
    println!("  as_text(12) = {}", as_text(&json!(12)));
    for event in [
        json!({"type": "login", "user": "ana"}),
        json!({"type": "logout"}),
        json!({"type": "purchase"}),
    ] {
        println!("  {:?}", process_event(&event));
    }
    Ok(())
}

async fn generators() -> Result<()> {
    console::section("Iterators and Generators");
    println!("  double: {:?}", double(&[0, 1, 2, 3, 4, 5]));
    println!("  multiply: {:?}", multiply(0..6, 3));
    println!("  count(3): {:?}", count(3).collect::<Vec<_>>());
    println!(
        "  flatten: {:?}",
        flatten(vec![vec![1, 2], vec![3]]).collect::<Vec<_>>()
    );

    let mut echo = Echo::new();
    for step in [
        echo.next_value()?,
        echo.send("hi")?,
        echo.send("all good")?,
        echo.send("stop")?,
    ] {
        match step {
            EchoStep::Yielded(value) => println!("  yielded: {value}"),
            EchoStep::Returned(value) => println!("  returned: {value}"),
        }
    }

    let streamed: Vec<u32> = count_stream(3).collect().await;
    println!("  async stream: {streamed:?}");

    let tracker = ResourceTracker::new();
    {
        let resource = tracker.acquire();
        println!("  resource: {} (open: {})", resource.value(), tracker.open());
    }
    let resource = tracker.acquire_async().await;
    println!("  async resource: {} (open: {})", resource.value(), tracker.open());
    drop(resource);
    println!("  released (open: {})", tracker.open());
    Ok(())
}

fn fluent() {
    console::section("Fluent Methods");
    let mut person = Person::new("João", "Justino", 21);
    person.speak().birthday().speak();
    console::lines(person.transcript());
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    aliases()?;
    records()?;
    protocols();
    generics();
    overloads()?;
    narrowing()?;
    generators().await?;
    fluent();
    Ok(())
}
