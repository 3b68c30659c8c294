//! Global Stylesheet
//!
//! Injected once by `App`. Light theme lives on `:root`; the `.dark`
//! class (toggled on the document root by the theme provider) swaps the
//! variable set for the whole page.

pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #f9fafb;
  --panel: #ffffff;
  --border: rgba(0, 0, 0, 0.08);
  --border-strong: rgba(0, 0, 0, 0.16);
  --text: #111827;
  --text-muted: #6b7280;
  --accent: #2563eb;
  --accent-text: #ffffff;
  --positive: #22c55e;
  --medal: #eab308;
  --surface-hover: rgba(0, 0, 0, 0.04);
  --shadow-soft: 0 1px 3px rgba(0, 0, 0, 0.1);
  --radius: 10px;
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --font-body: "Inter", "SF Pro Text", system-ui, -apple-system, sans-serif;
  --transition: 140ms ease-out;
}

.dark {
  --bg: #111827;
  --panel: #1f2937;
  --border: rgba(255, 255, 255, 0.08);
  --border-strong: rgba(255, 255, 255, 0.16);
  --text: #f9fafb;
  --text-muted: #9ca3af;
  --accent: #3b82f6;
  --surface-hover: rgba(255, 255, 255, 0.06);
  --shadow-soft: 0 1px 3px rgba(0, 0, 0, 0.4);
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: 14px;
  line-height: 1.5;
  min-height: 100%;
}

.dashboard {
  min-height: 100vh;
  padding: var(--space-4);
  background: var(--bg);
  color: var(--text);
  transition: background var(--transition), color var(--transition);
}

.dashboard-inner {
  max-width: 1100px;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.header-bar {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.header-title {
  margin: 0;
  font-size: 24px;
  font-weight: 700;
}

.header-actions { display: flex; gap: var(--space-2); }

.btn {
  border: 1px solid var(--border);
  background: var(--panel);
  color: var(--text);
  padding: 8px 14px;
  border-radius: var(--radius);
  font-size: 14px;
  cursor: pointer;
  transition: background var(--transition), border-color var(--transition);
}
.btn:hover { background: var(--surface-hover); border-color: var(--border-strong); }
.btn.primary { background: var(--accent); border-color: transparent; color: var(--accent-text); font-weight: 600; }
.btn.primary:hover { filter: brightness(1.05); }
.btn.small { padding: 4px 10px; font-size: 13px; }

.card {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  padding: var(--space-4);
}

.card-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-4);
}

@media (min-width: 768px) {
  .card-grid { grid-template-columns: repeat(3, 1fr); }
}

.card-header { display: flex; flex-direction: column; gap: var(--space-1); margin-bottom: var(--space-3); }
.card-title { margin: 0; font-size: 17px; font-weight: 600; }
.card-description { margin: 0; font-size: 13px; color: var(--text-muted); }
.card-body { display: flex; flex-direction: column; gap: var(--space-3); }

.completion-row { display: flex; justify-content: space-between; align-items: center; }
.completion-check { color: var(--positive); margin-right: var(--space-2); }
.medal { color: var(--medal); }

.chart-svg { width: 100%; height: auto; display: block; }
.chart-grid-line { stroke: var(--border-strong); stroke-dasharray: 3 3; }
.chart-axis-line { stroke: var(--border-strong); }
.chart-axis-label { fill: var(--text-muted); font-size: 11px; }

.chart-legend { display: flex; gap: var(--space-4); flex-wrap: wrap; }
.legend-item { display: inline-flex; align-items: center; gap: 6px; font-size: 13px; color: var(--text-muted); }
.legend-swatch { width: 10px; height: 10px; border-radius: 2px; display: inline-block; }

.checklist { display: flex; flex-direction: column; gap: var(--space-3); }
.checklist-row { display: flex; justify-content: space-between; align-items: center; }

@media (max-width: 640px) {
  .dashboard { padding: var(--space-2); }
  .header-bar { flex-wrap: wrap; gap: var(--space-2); }
}
"#;
