//! Test fixtures and sample vaults.

use vault_block_search::{DocumentRef, MemoryDocumentStore};

#[allow(dead_code)]
pub const INBOX: &str = "# Inbox\n\n- Call [[Dr. Smith]] #health\n- Buy milk\n";

#[allow(dead_code)]
pub const PROJECTS: &str =
    "---\nstatus: active\n---\nSee [[Dr. Smith]] about schedule.\n";

/// The two-note vault used by the end-to-end scenario.
#[allow(dead_code)]
pub fn scenario_store() -> MemoryDocumentStore {
    MemoryDocumentStore::new()
        .with_markdown(DocumentRef::new("Inbox.md"), INBOX)
        .with_markdown(DocumentRef::new("Projects.md"), PROJECTS)
}

/// A document tagged `[urgent, work]` and one tagged `[home]`.
#[allow(dead_code)]
pub fn tagged_store() -> MemoryDocumentStore {
    MemoryDocumentStore::new()
        .with_markdown(
            DocumentRef::new("Tasks.md"),
            "---\ntags: [urgent, work]\n---\nShip the release.\n",
        )
        .with_markdown(
            DocumentRef::new("Chores.md"),
            "---\ntags:\n  - home\n---\nWater the plants.\n",
        )
}

/// A single three-item list where only the second item links to Target.
#[allow(dead_code)]
pub fn list_store() -> MemoryDocumentStore {
    MemoryDocumentStore::new().with_markdown(
        DocumentRef::new("List.md"),
        "- first item\n- second [[Target]]\n- third item\n",
    )
}

/// Documents named and timestamped so title and modified order disagree.
#[allow(dead_code)]
pub fn timestamped_store() -> MemoryDocumentStore {
    MemoryDocumentStore::new()
        .with_markdown(
            DocumentRef::new("a.md").with_timestamps(3, 30),
            "Alpha [[Hub]]",
        )
        .with_markdown(
            DocumentRef::new("c.md").with_timestamps(1, 10),
            "Gamma [[Hub]]",
        )
        .with_markdown(
            DocumentRef::new("b.md").with_timestamps(2, 20),
            "Beta [[Hub]]",
        )
}

/// A mixed vault with every searchable section kind.
#[allow(dead_code)]
pub fn mixed_store() -> MemoryDocumentStore {
    MemoryDocumentStore::new()
        .with_markdown(
            DocumentRef::new("Mixed.md"),
            "# Heading [[Alpha]]\n\
             \n\
             Paragraph with [[Alpha]].\n\
             \n\
             | col | [[Alpha]] |\n\
             | --- | --- |\n\
             \n\
             > [!note] Callout\n\
             > mentions [[Alpha]]\n\
             \n\
             ```\n\
             [[Alpha]] in code\n\
             ```\n\
             \n\
             [^1]: Footnote [[Alpha]]\n",
        )
        .with_markdown(DocumentRef::new("Empty.md"), "# Only a heading [[Alpha]]\n")
}
