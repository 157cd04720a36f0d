use crate::model::ReportData;

/// Render a self-contained HTML report (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_report(data: &ReportData) -> anyhow::Result<String> {
    let json = serde_json::to_string(data)?; // embedded as JS object literal

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Crew Plan</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  .main { padding: 12px 16px; overflow: auto; }

  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }

  .phases { display: flex; gap: 8px; flex-wrap: wrap; margin: 8px 0; font-size: 13px; }
  .phase { padding: 3px 8px; border-radius: 4px; color: white; }
  .muted { color: #777; font-size: 12px; }

  table { border-collapse: collapse; margin-top: 8px; }
  th, td { border-bottom: 1px solid #eee; padding: 4px 6px; text-align: right; font-size: 13px; white-space: nowrap; }
  th { position: sticky; top: 0; background: white; border-bottom: 1px solid #ddd; }
  td.name, th.name { text-align: left; position: sticky; left: 0; background: white; }
  td.active { background: #e9f2ff; }
  td.peak { background: #cfe3ff; font-weight: 600; }
  tr.totals td { border-top: 2px solid #bbb; font-weight: 600; }
</style>
</head>
<body>
<header>
  <div class="summary" id="summary"></div>
  <div class="phases" id="phases"></div>
</header>

<div class="main">
  <table id="matrix">
    <thead><tr id="monthHeader"></tr></thead>
    <tbody id="matrixBody"></tbody>
  </table>
</div>

<script>
// Embedded report data (JSON object literal)
const DATA = __DATA__;

// Same palette the planning sheets use for phase bands.
const PHASE_COLORS = ['#1976D2', '#4CAF50', '#FF9800', '#9C27B0', '#F44336'];

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function fmtMoney(x) {
  return x.toLocaleString("en-US");
}

function renderSummary() {
  const t = DATA.totals;
  const el = document.getElementById("summary");
  el.innerHTML = `
    <span class="pill">departments: <b>${t.departments}</b></span>
    <span class="pill">months: <b>${t.total_months}</b></span>
    <span class="pill">man-months: <b>${t.total_man_months}</b></span>
    <span class="pill">peak crew: <b>${t.peak_crew}</b> (${escapeHtml(DATA.month_labels[t.peak_crew_month] || "")})</span>
    <span class="pill">total cost: <b>${fmtMoney(t.total_labor_cost)}</b></span>
    <span class="pill">peak monthly cost: <b>${fmtMoney(t.peak_monthly_cost)}</b></span>
  `;
}

function renderPhases() {
  const el = document.getElementById("phases");
  el.innerHTML = "";
  DATA.phases.forEach((phase, i) => {
    const span = document.createElement("span");
    span.className = "phase";
    span.style.background = PHASE_COLORS[i % PHASE_COLORS.length];
    const from = DATA.month_labels[phase.start_month] || `month ${phase.start_month}`;
    const to = DATA.month_labels[phase.end_month] || `month ${phase.end_month}`;
    span.textContent = `${phase.name}: ${from} – ${to}`;
    el.appendChild(span);
  });
}

function renderMatrix() {
  const header = document.getElementById("monthHeader");
  header.innerHTML = `<th class="name">Department</th>` +
    DATA.month_labels.map(m => `<th>${escapeHtml(m)}</th>`).join("");

  const body = document.getElementById("matrixBody");
  body.innerHTML = "";

  for (const dept of DATA.departments) {
    const tr = document.createElement("tr");
    const cells = dept.curve.map((crew, month) => {
      const active = month >= dept.start_month && month <= dept.end_month;
      const cls = crew === dept.max_crew && crew > 0 && active ? "peak" : (active ? "active" : "");
      return `<td class="${cls}">${crew > 0 ? crew : ""}</td>`;
    });
    tr.innerHTML = `<td class="name">${escapeHtml(dept.name)} <span class="muted">(max ${dept.max_crew})</span></td>` + cells.join("");
    body.appendChild(tr);
  }

  const rows = [
    ["Total Crew", DATA.monthly_crew, x => x || ""],
    ["Monthly Cost", DATA.monthly_cost, x => x ? fmtMoney(x) : ""],
    ["Cumulative Cost", DATA.cumulative_cost, x => x ? fmtMoney(x) : ""],
  ];
  for (const [label, values, fmt] of rows) {
    const tr = document.createElement("tr");
    tr.className = "totals";
    tr.innerHTML = `<td class="name">${label}</td>` +
      values.map(v => `<td>${fmt(v)}</td>`).join("");
    body.appendChild(tr);
  }
}

renderSummary();
renderPhases();
renderMatrix();
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
