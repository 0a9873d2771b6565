//! Command-line driver mirroring spec.md §6's "Example driver (out of
//! core)" contract: build a server with a stop-word list, add a few
//! documents, run a query, and print results through the canonical
//! formatter. This binary is not part of the library surface.

use search_server::core::types::DocumentStatus;
use search_server::SearchServer;

fn main() {
    let mut server = SearchServer::with_stop_words_text("и в на").expect("valid stop words");

    server
        .add_document(1, "белый кот и модный ошейник", DocumentStatus::Actual, &[8, 9, 10])
        .expect("valid document");
    server
        .add_document(2, "пушистый кот пушистый хвост", DocumentStatus::Actual, &[7])
        .expect("valid document");
    server
        .add_document(3, "ухоженный пёс выразительные глаза", DocumentStatus::Actual, &[5])
        .expect("valid document");

    match server.find_top_documents_actual("пушистый ухоженный кот") {
        Ok(documents) => {
            for doc in documents {
                println!("{{ document_id = {}, relevance = {}, rating = {} }}", doc.id, doc.relevance, doc.rating);
            }
        }
        Err(err) => eprintln!("query failed: {err}"),
    }

    server
        .add_document(4, "белый кот и модный ошейник", DocumentStatus::Actual, &[8, 9, 10])
        .expect("valid document");
    search_server::search::duplicates::remove_duplicates_reporting(&mut server);
}
