//! Placeholder blocks shown while a collection is empty.

use crate::view::{CaseStudyBlock, ContentBlock, LeaderBlock, SecondaryBlock};

fn block(title: &str, body: &str) -> ContentBlock {
    ContentBlock { title: title.into(), body: body.into() }
}

fn leader(name: &str, title: &str) -> LeaderBlock {
    LeaderBlock { initials: crate::view::initials(name), name: name.into(), title: title.into() }
}

pub fn offerings() -> Vec<ContentBlock> {
    vec![
        block(
            "🤖 Generative AI",
            "Harness the power of advanced generative AI models to create content, automate processes, and generate insights that drive innovation across your organization.",
        ),
        block(
            "🧠 Agentic AI",
            "Deploy intelligent AI agents that can reason, plan, and execute complex tasks autonomously, revolutionizing how your business operates and scales.",
        ),
        block(
            "📊 Data Analytics",
            "Transform your data into strategic advantages with our comprehensive analytics solutions, featuring real-time insights and predictive modeling capabilities.",
        ),
    ]
}

pub fn solutions() -> Vec<ContentBlock> {
    vec![
        block(
            "📄 Intelligent Document Processing",
            "Automate document analysis, extraction, and processing using advanced AI to streamline your workflows and reduce manual effort...",
        ),
        block(
            "🔧 Predictive Maintenance",
            "Leverage IoT sensors and machine learning to predict equipment failures before they occur, minimizing downtime and optimizing...",
        ),
    ]
}

pub fn services() -> Vec<ContentBlock> {
    vec![
        block(
            "🤖 AI & Machine Learning Services",
            "Complete AI development lifecycle services including model design, training, deployment, and optimization. Our expert team delivers custom AI solutions that align with your business objectives and drive measurable outcomes.",
        ),
        block(
            "📊 Data Engineering & Analytics",
            "Comprehensive data infrastructure services including data pipeline development, warehouse design, real-time processing, and advanced analytics to unlock the full potential of your data assets.",
        ),
    ]
}

pub fn insights() -> Vec<ContentBlock> {
    vec![
        block(
            "The Future of Generative AI in Enterprise",
            "Exploring how generative AI is reshaping business processes and creating new opportunities for innovation across industries.",
        ),
        block(
            "Data Privacy in the AI Era",
            "Understanding the critical balance between AI innovation and data privacy protection in modern business environments.",
        ),
        block(
            "Building Ethical AI Systems",
            "Best practices for developing AI solutions that are transparent, fair, and aligned with ethical business principles.",
        ),
    ]
}

pub fn case_studies() -> Vec<CaseStudyBlock> {
    vec![
        CaseStudyBlock {
            badge: "Generative AI".into(),
            title: "Transforming Customer Service with AI Chatbots".into(),
            description: "A leading e-commerce company reduced customer service response time by 75% and improved satisfaction scores by implementing our advanced AI chatbot solution.".into(),
            secondary: Some(SecondaryBlock {
                subtitle: "Implementation Results".into(),
                description: "The solution processed over 100,000 customer queries monthly with 95% accuracy, resulting in $2M annual savings in support costs while maintaining exceptional customer experience.".into(),
            }),
        },
        CaseStudyBlock {
            badge: "Data Analytics".into(),
            title: "Predictive Analytics for Supply Chain Optimization".into(),
            description: "A multinational manufacturer achieved 30% reduction in inventory costs and 25% improvement in delivery times through our predictive analytics platform.".into(),
            secondary: None,
        },
    ]
}

pub fn leadership() -> Vec<LeaderBlock> {
    vec![
        leader("Dr. Jane Smith", "Chief Executive Officer & Co-Founder"),
        leader("Michael Johnson", "Chief Technology Officer"),
        leader("Sarah Chen", "Chief Data Scientist"),
    ]
}
