//! Static tutorial page.
//!
//! Rendering never looks at a session's `current_section`: the navigation
//! buttons only record a label and show a notice, so the markup is identical
//! for every session. The one variable part is the notice slot under the
//! navigation row.

use shared::{
    domain::NavTrigger,
    protocol::{Notice, NoticeLevel},
};

pub const PAGE_TITLE: &str =
    "LangChain Tutorial: Document Loaders, Embeddings, and Vector Stores";
pub const PAGE_ICON: &str = "🔍";

/// Form endpoint the navigation buttons post to.
pub const SELECT_ACTION: &str = "/select";

pub const PIPELINE_STAGES: [&str; 7] = [
    "Document Loading",
    "Text Splitting",
    "Embedding",
    "Vector Storage",
    "Query Processing",
    "Context Retrieval",
    "LLM Generation",
];

pub const RESOURCE_LINKS: [(&str, &str); 3] = [
    (
        "LangChain Documentation",
        "https://python.langchain.com/docs/get_started/introduction",
    ),
    (
        "RAG Tutorial",
        "https://python.langchain.com/docs/use_cases/question_answering/",
    ),
    ("Hugging Face", "https://huggingface.co/"),
];

pub const CONTACT_EMAIL: &str = "tutorial@example.com";

const STYLES: &str = r#"<style>
    body {
        font-family: "Source Sans Pro", sans-serif;
        margin: 0 auto;
        max-width: 1200px;
        padding: 2rem 3rem;
    }
    .main-header {
        font-size: 3.5rem;
        font-weight: 700;
        color: #1f77b4;
        text-align: center;
        margin-bottom: 0.5rem;
    }
    .subtitle {
        font-size: 1.5rem;
        color: #666;
        text-align: center;
        margin-bottom: 2rem;
    }
    .section-header {
        font-size: 2rem;
        color: #1f77b4;
        margin-top: 2rem;
        margin-bottom: 1rem;
        border-bottom: 2px solid #1f77b4;
        padding-bottom: 0.5rem;
    }
    .card {
        background-color: #f8f9fa;
        border-radius: 10px;
        padding: 1.5rem;
        margin: 1rem 0;
        border-left: 5px solid #1f77b4;
    }
    .columns {
        display: flex;
        gap: 1rem;
    }
    .columns > * {
        flex: 1;
    }
    .columns > .wide {
        flex: 2;
    }
    .nav-button {
        background-color: #1f77b4;
        color: white;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 5px;
        font-size: 1rem;
        cursor: pointer;
        margin: 0.5rem;
        width: 100%;
        text-align: center;
    }
    .nav-button:hover {
        background-color: #155a8a;
    }
    .notice {
        padding: 1rem;
        border-radius: 5px;
        margin: 0.5rem 0;
    }
    .notice-info {
        background-color: #e8f1fb;
        color: #0b4f8a;
    }
    .footer {
        background-color: #f1f1f1;
        padding: 2rem;
        border-radius: 10px;
        margin-top: 3rem;
        text-align: center;
    }
</style>"#;

const HEADER: &str = r#"<div class="main-header">LangChain Tutorial</div>
<div class="subtitle">Document Loaders, Embeddings, and Vector Stores for Retrieval-Augmented Generation (RAG)</div>"#;

const OVERVIEW: &str = r#"<div class="section-header">Overview</div>
<div class="columns">
    <div class="card wide">
        <h3>What You'll Learn</h3>
        <p>This tutorial covers the essential components for building semantic search engines and RAG applications using LangChain:</p>
        <ul>
            <li><strong>Document Loaders</strong>: Extract and load data from various sources (PDFs, websites, databases)</li>
            <li><strong>Embeddings</strong>: Convert text into numerical vectors that capture semantic meaning</li>
            <li><strong>Vector Stores</strong>: Efficiently store and retrieve embedded documents</li>
            <li><strong>RAG Applications</strong>: Combine retrieval with generation for accurate, context-aware responses</li>
        </ul>
    </div>
    <div class="card">
        <h3>Why This Matters</h3>
        <p>These technologies are crucial for:</p>
        <ul>
            <li>Overcoming LLM context window limitations</li>
            <li>Providing up-to-date information beyond training data</li>
            <li>Building domain-specific AI applications</li>
            <li>Improving response accuracy with relevant context</li>
        </ul>
    </div>
</div>"#;

const KEY_CONCEPTS: &str = r#"<div class="section-header">Key Concepts</div>
<div class="columns">
    <div style="text-align: center; padding: 1rem;">
        <h3>📄 Document Loaders</h3>
        <p>LangChain provides specialized loaders for hundreds of data sources including PDFs, websites, databases, and more. These convert raw data into standardized Document objects with metadata.</p>
    </div>
    <div style="text-align: center; padding: 1rem;">
        <h3>🔤 Embeddings</h3>
        <p>Embedding models convert text into dense vector representations where semantically similar texts are geometrically close. This enables semantic search beyond keyword matching.</p>
    </div>
    <div style="text-align: center; padding: 1rem;">
        <h3>🗄️ Vector Stores</h3>
        <p>Vector databases efficiently store and retrieve embedded documents using similarity search. Popular options include Chroma, Pinecone, and FAISS.</p>
    </div>
</div>"#;

const PREREQUISITES: &str = r#"<div class="section-header">Prerequisites</div>
<div class="card">
    <ul>
        <li>Basic Python programming knowledge</li>
        <li>Familiarity with machine learning concepts</li>
        <li>Python 3.8+ installed on your system</li>
        <li>Basic understanding of LLMs and their applications</li>
    </ul>
</div>"#;

pub fn render_page(notice: Option<&Notice>) -> String {
    let mut html = String::with_capacity(12 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    html.push_str(&format!(
        "<link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>{PAGE_ICON}</text></svg>\">\n"
    ));
    html.push_str(STYLES);
    html.push_str("\n</head>\n<body>\n");

    html.push_str(HEADER);
    html.push('\n');
    html.push_str(OVERVIEW);
    html.push('\n');
    render_navigation(&mut html, notice);
    html.push_str(KEY_CONCEPTS);
    html.push('\n');
    render_workflow(&mut html);
    html.push_str(PREREQUISITES);
    html.push('\n');
    render_footer(&mut html);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_navigation(html: &mut String, notice: Option<&Notice>) {
    html.push_str("<div class=\"section-header\">Tutorial Navigation</div>\n");
    html.push_str("<div class=\"columns\">\n");
    for trigger in NavTrigger::ALL {
        html.push_str(&format!(
            "    <form method=\"post\" action=\"{SELECT_ACTION}\"><button class=\"nav-button\" type=\"submit\" name=\"trigger\" value=\"{}\">{}</button></form>\n",
            trigger.key(),
            trigger.button_label(),
        ));
    }
    html.push_str("</div>\n");
    if let Some(notice) = notice {
        html.push_str(&render_notice(notice));
        html.push('\n');
    }
}

pub fn render_notice(notice: &Notice) -> String {
    let class = match notice.level {
        NoticeLevel::Info => "notice notice-info",
    };
    format!(
        "<div class=\"{class}\" role=\"status\">{}</div>",
        html_escape::encode_text(&notice.message)
    )
}

fn render_workflow(html: &mut String) {
    html.push_str("<div class=\"section-header\">RAG Workflow</div>\n");
    html.push_str("<div style=\"text-align: center; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 2rem; border-radius: 10px; color: white; margin: 1rem 0;\">\n");
    html.push_str("    <h3 style=\"color: white;\">Retrieval-Augmented Generation Pipeline</h3>\n");
    html.push_str(&format!(
        "    <p><strong>{}</strong></p>\n",
        PIPELINE_STAGES.join(" → ")
    ));
    html.push_str("</div>\n");
}

fn render_footer(html: &mut String) {
    let links = RESOURCE_LINKS
        .iter()
        .map(|(title, href)| format!("<a href=\"{href}\" target=\"_blank\">{title}</a>"))
        .collect::<Vec<_>>()
        .join(" • \n        ");

    html.push_str("<div class=\"footer\">\n    <h3>Additional Resources</h3>\n");
    html.push_str(&format!("    <p>\n        {links}\n    </p>\n"));
    html.push_str("    <p><strong>Created for educational purposes</strong> - This tutorial demonstrates core concepts for building semantic search and RAG applications.</p>\n");
    html.push_str(&format!(
        "    <p>For questions or feedback, please contact: {CONTACT_EMAIL}</p>\n"
    ));
    html.push_str("    <p style=\"margin-top: 1rem; font-size: 0.8rem; color: #666;\">\n        © 2024 LangChain Tutorial. All rights reserved.\n    </p>\n");
    html.push_str("</div>\n");
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
