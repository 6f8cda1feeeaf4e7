pub const APP_TITLE: &str = "VoC Intelligence Platform";
pub const APP_SUBTITLE: &str = "Automated Review Analysis & Insight Generation";

pub const WEBSITE_TITLE: &str = "Step 1: Company Website";
pub const COMPETITORS_TITLE: &str = "Step 2: Verify Competitors";
pub const APP_IDS_TITLE: &str = "Step 3: Verify App Store IDs";

pub const COMPETITORS_INTRO: &str = "We found these potential competitors. Verify or add more.";
pub const APP_IDS_HINT: &str = "Check the IDs below. If an ID is missing or incorrect, you can edit it manually. Only rows with at least one ID will be scraped.";

pub const POLLING_HEADLINE: &str = "Scraping in Progress...";
pub const POLLING_HINT: &str = "This usually takes 3-5 minutes. You can leave this screen open.";
pub const COMPLETED_HEADLINE: &str = "Scraping Complete!";
pub const COMPLETED_HINT: &str = "Your data has been successfully collected.";
pub const FAILED_HEADLINE: &str = "Job Failed or Timed Out";
pub const FINAL_HEADLINE: &str = "VoC Magic is happening";
pub const FINAL_HINT: &str = "Dashboard link will be sent by e-mail shortly.";

pub const KEY_HINTS: &str = "Tab/Shift-Tab move · Enter select · Ctrl-N add · Ctrl-D remove · Esc quit";
