use clap::Parser;
use kyakuhon::graph::{GraphDocument, RawAssociation, RawEntity, TEXT_NODE_TYPE};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random graph documents for converter testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// The number of content nodes to generate (excluding root, version, roles)
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// The number of role definitions to generate
    #[arg(long, default_value_t = 2)]
    roles: usize,
}

const ROLE_NAMES: &[&str] = &["Aria", "Bren", "Cass", "Doran", "Eda", "Fenn"];
const SENTENCES: &[&str] = &[
    "The gate is sealed from the other side.",
    "We should not linger here.",
    "Did you hear that?",
    "Follow the lanterns to the old bridge.",
    "Everything is ready. Say the word.",
];
const BUTTON_LABELS: &[&str] = &["Continue", "Look around", "Ask about the key", "Leave"];
const EVENT_NAMES: &[&str] = &["door_opened", "lantern_lit", "key_found", "bridge_crossed"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating a graph document ({} content nodes, {} roles)...",
        cli.nodes, cli.roles
    );

    let graph = generate_graph(&mut rng, cli.nodes, cli.roles);

    let json_output = serde_json::to_string_pretty(&graph)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved graph document to '{}'",
        cli.output
    );

    Ok(())
}

/// Builds a graph whose conversion is valid: a version node, role
/// definitions, and a root with exactly one child anchoring a random tree
/// of content nodes.
fn generate_graph(rng: &mut ThreadRng, node_count: usize, role_count: usize) -> GraphDocument {
    let mut entities = Vec::new();
    let mut associations = Vec::new();

    entities.push(text_node(
        "node-0000",
        &format!("version\n0.1.{}", rng.random_range(0..100)),
    ));

    for i in 0..role_count {
        let name = ROLE_NAMES[i % ROLE_NAMES.len()];
        entities.push(text_node(
            &format!("role-{:04}", i),
            &format!("role\nid:{}\nname:{}", name.to_lowercase(), name),
        ));
        println!("-> Generated role '{}'.", name.to_lowercase());
    }

    entities.push(text_node("node-0001", "root\nGenerated Script"));

    // Tree shape: the first content node hangs off the root (its only
    // child); every later node attaches to a random earlier content node.
    let mut parent_ids: Vec<String> = Vec::new();
    for i in 0..node_count.max(1) {
        let uuid = format!("node-{:04}", i + 2);
        entities.push(text_node(&uuid, &random_label(rng, role_count)));

        let parent = if i == 0 {
            "node-0001".to_string()
        } else {
            parent_ids[rng.random_range(0..parent_ids.len())].clone()
        };
        associations.push(RawAssociation {
            source: parent,
            target: uuid.clone(),
        });
        parent_ids.push(uuid);
    }

    // Terminate one random branch so the tree has an explicit ending
    let end_uuid = format!("node-{:04}", node_count.max(1) + 2);
    entities.push(text_node(&end_uuid, "end"));
    associations.push(RawAssociation {
        source: parent_ids[rng.random_range(0..parent_ids.len())].clone(),
        target: end_uuid,
    });

    println!(
        "-> Generated {} entities and {} associations.",
        entities.len(),
        associations.len()
    );

    GraphDocument {
        entities,
        associations,
    }
}

fn random_label(rng: &mut ThreadRng, role_count: usize) -> String {
    match rng.random_range(0..3) {
        0 => {
            let role = ROLE_NAMES[rng.random_range(0..role_count.max(1)) % ROLE_NAMES.len()];
            let sentence = SENTENCES[rng.random_range(0..SENTENCES.len())];
            format!("text\n{}\n{}", role.to_lowercase(), sentence)
        }
        1 => format!(
            "btn\n{}",
            BUTTON_LABELS[rng.random_range(0..BUTTON_LABELS.len())]
        ),
        _ => format!(
            "event\n{}",
            EVENT_NAMES[rng.random_range(0..EVENT_NAMES.len())]
        ),
    }
}

fn text_node(uuid: &str, text: &str) -> RawEntity {
    RawEntity {
        entity_type: TEXT_NODE_TYPE.to_string(),
        uuid: uuid.to_string(),
        text: text.to_string(),
    }
}
