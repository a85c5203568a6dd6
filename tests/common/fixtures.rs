//! Reusable project file contents.

pub const ORCHESTRATOR_JS: &str = r#"// Purpose: coordinate agent workflows
const { EventEmitter } = require('events');
import axios from 'axios';

function runOrchestration(steps) {
  return steps.map((s) => s());
}

class Orchestrator extends EventEmitter {}
"#;

pub const BOOKING_JS: &str = r#"/**
 * @description Flight booking helpers
 */
function processCustomerBooking(flight) {
  return { flight, status: 'booked' };
}
"#;

pub const README_MD: &str = "# Demo\n\nOverview: an orchestration platform for agents\n";

pub const PACKAGE_JSON: &str = r#"{
  "name": "demo",
  "dependencies": { "express": "^4.18.0" },
  "devDependencies": { "jest": "^29.0.0" }
}
"#;

pub const MONITOR_PY: &str = "import os\nfrom datetime import datetime\n\ndef collect_metrics():\n    pass\n\nclass Monitor:\n    pass\n";
