//! All user-facing copy in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,

    // Step headings
    pub definition_heading: &'static str,
    pub allocation_heading: &'static str,
    pub contract_heading: &'static str,
    pub settings_heading: &'static str,
    pub monitor_heading: &'static str,
    pub dashboard_heading: &'static str,

    // Definition form
    pub name_label: &'static str,
    pub symbol_label: &'static str,
    pub type_label: &'static str,
    pub supply_label: &'static str,
    pub decimals_label: &'static str,
    pub description_label: &'static str,
    pub features_label: &'static str,
    pub definition_submit: &'static str,
    pub ai_notes_label: &'static str,

    // Allocation form
    pub new_category_label: &'static str,
    pub percentage_label: &'static str,
    pub add_allocation: &'static str,
    pub remove_allocation: &'static str,
    pub total_allocated_label: &'static str,
    pub allocation_chart_title: &'static str,

    // Contract step
    pub contract_blurb: &'static str,

    // Settings form
    pub network_label: &'static str,
    pub owner_label: &'static str,
    pub owner_hint: &'static str,
    pub gas_label: &'static str,
    pub front_run_label: &'static str,
    pub custom_network_heading: &'static str,
    pub custom_network_name: &'static str,
    pub custom_network_chain_id: &'static str,
    pub custom_network_explorer: &'static str,
    pub custom_network_add: &'static str,
    pub deploy_button: &'static str,

    // Monitor
    pub monitor_pending: &'static str,
    pub monitor_deploying: &'static str,
    pub monitor_completed: &'static str,
    pub monitor_address_label: &'static str,
    pub monitor_hash_label: &'static str,
    pub monitor_next: &'static str,

    // Dashboard
    pub stat_total_supply: &'static str,
    pub stat_circulating: &'static str,
    pub stat_burned: &'static str,
    pub stat_holders: &'static str,
    pub quick_management: &'static str,
    pub recent_activity: &'static str,

    // Navigation
    pub back: &'static str,
    pub next: &'static str,

    // AI dialog
    pub ai_open_button: &'static str,
    pub ai_dialog_title: &'static str,
    pub ai_prompt_label: &'static str,
    pub ai_prompt_hint: &'static str,
    pub ai_generate: &'static str,
    pub ai_generating: &'static str,
    pub ai_cancel: &'static str,
    pub ai_no_key_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "TokenForge",
    app_subtitle: "Design, verify, and deploy institutional-grade smart contracts.",

    definition_heading: "1. Define Your Token",
    allocation_heading: "2. Tokenomics & Allocation",
    contract_heading: "3. Smart Contract Configuration",
    settings_heading: "4. Deployment Settings",
    monitor_heading: "5. Deployment Monitor",
    dashboard_heading: "6. Post-Issuance Dashboard",

    name_label: "Token Name",
    symbol_label: "Symbol",
    type_label: "Type",
    supply_label: "Total Supply",
    decimals_label: "Decimals",
    description_label: "Description",
    features_label: "FEATURES",
    definition_submit: "Continue to Tokenomics",
    ai_notes_label: "AI Modeler Notes",

    new_category_label: "New Category",
    percentage_label: "Percentage",
    add_allocation: "Add Allocation",
    remove_allocation: "Remove",
    total_allocated_label: "Total Allocated",
    allocation_chart_title: "Allocation Distribution",

    contract_blurb: "Your contract will be built using audited OpenZeppelin templates. \
                     We are preparing the core logic modules based on your selected features.",

    network_label: "Target Network",
    owner_label: "Owner Address",
    owner_hint: "0x...",
    gas_label: "Gas Strategy",
    front_run_label: "Enable Front-run Protection",
    custom_network_heading: "Add custom network",
    custom_network_name: "Name",
    custom_network_chain_id: "Chain ID",
    custom_network_explorer: "Explorer URL",
    custom_network_add: "Add Network",
    deploy_button: "Deploy Contract",

    monitor_pending: "Initializing transaction...",
    monitor_deploying: "Pushing smart contract to network...",
    monitor_completed: "Successfully deployed!",
    monitor_address_label: "Address",
    monitor_hash_label: "Hash",
    monitor_next: "Go to Dashboard",

    stat_total_supply: "TOTAL SUPPLY",
    stat_circulating: "CIRCULATING",
    stat_burned: "BURNED",
    stat_holders: "HOLDERS",
    quick_management: "Quick Management",
    recent_activity: "Recent Activity",

    back: "Back",
    next: "Next Step",

    ai_open_button: "AI Modeler",
    ai_dialog_title: "AI Tokenomics Wizard",
    ai_prompt_label: "Describe your project vision",
    ai_prompt_hint: "e.g. A decentralized storage network where users pay in tokens for capacity...",
    ai_generate: "Generate Model",
    ai_generating: "Generating...",
    ai_cancel: "Cancel",
    ai_no_key_hint: "Set GEMINI_API_KEY to enable generation",
};
