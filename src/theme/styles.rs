//! Global CSS styles.
//!
//! Colors come from the `:root` variables emitted by `colors::root_variables`.

pub const GLOBAL_STYLES: &str = r#"
/* === Tokens === */
:root {
  --font-sans: 'Poppins', 'Segoe UI', Roboto, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  --radius: 10px;
  --radius-pill: 25px;
  --shadow-card: 0 4px 18px rgba(0, 0, 0, 0.08);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--page-bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
}

a {
  color: var(--green);
  text-decoration: none;
  transition: color var(--transition-fast);
}

a:hover {
  color: var(--green-dark);
}

/* === Layout === */
.page {
  min-height: calc(100vh - 140px);
  padding: 88px 5% 48px;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  margin-bottom: 1rem;
}

.section-header {
  font-size: var(--text-xl);
  font-weight: 600;
  margin: 2.5rem 0 1.25rem;
}

.body-text {
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
}

.muted {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.card {
  background: var(--card-bg);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  padding: 1.5rem;
}

.card h3 {
  font-size: var(--text-lg);
  margin-bottom: 0.5rem;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  background: var(--green);
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.12);
}

.navbar-inner {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  height: 64px;
  padding: 0 5%;
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: #fff;
  font-weight: 600;
  font-size: var(--text-lg);
}

.navbar-brand:hover {
  color: #fff;
}

.navbar-toggle {
  display: none;
  margin-left: auto;
  background: none;
  border: none;
  color: #fff;
  font-size: var(--text-xl);
  cursor: pointer;
}

.navbar-links {
  display: flex;
  gap: 1.25rem;
  margin-left: auto;
}

.nav-link {
  color: rgba(255, 255, 255, 0.85);
  font-weight: 500;
  padding: 0.25rem 0;
  border-bottom: 2px solid transparent;
}

.nav-link:hover,
.nav-link.active {
  color: #fff;
  border-bottom-color: #fff;
}

.user-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 40px;
  height: 40px;
  border-radius: 50%;
  border: 2px solid rgba(255, 255, 255, 0.8);
  background: transparent;
  color: #fff;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.user-icon:hover {
  background: rgba(255, 255, 255, 0.15);
}

@media (max-width: 760px) {
  .navbar-toggle {
    display: block;
  }

  .navbar-links {
    display: none;
    position: absolute;
    top: 64px;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--green-dark);
  }

  .navbar-links.open {
    display: flex;
  }

  .navbar-links .nav-link {
    padding: 0.75rem 5%;
    border-bottom: none;
  }
}

/* === Footer === */
.footer {
  background: #263238;
  color: rgba(255, 255, 255, 0.75);
  font-size: var(--text-sm);
}

.footer-inner {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 1rem;
  padding: 1.5rem 5%;
}

.footer-links {
  display: flex;
  gap: 1.25rem;
}

.footer-links a {
  color: rgba(255, 255, 255, 0.85);
}

/* === Auth forms === */
.login-container {
  position: relative;
  min-height: calc(100vh - 200px);
}

.wave {
  position: fixed;
  bottom: 0;
  left: 0;
  height: 100%;
  width: 40%;
  z-index: -1;
  background: linear-gradient(160deg, var(--green-soft), var(--green));
  border-top-right-radius: 45% 60%;
  opacity: 0.35;
}

.login-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 6rem;
  align-items: center;
  padding: 0 2rem;
}

.login-illustration {
  display: flex;
  justify-content: flex-end;
}

.illustration-glyph {
  font-size: 12rem;
  line-height: 1;
}

.login-content {
  display: flex;
  justify-content: flex-start;
}

.login-content form {
  width: 380px;
  text-align: center;
}

.avatar-wrapper {
  display: flex;
  justify-content: center;
}

.avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 96px;
  height: 96px;
  border-radius: 50%;
  background: var(--green-soft);
  font-size: 3rem;
}

.login-content .title {
  margin: 15px 0;
  color: var(--text-primary);
  text-transform: uppercase;
  font-size: var(--text-2xl);
}

@media (max-width: 900px) {
  .login-grid {
    grid-template-columns: 1fr;
    gap: 2rem;
  }

  .login-illustration {
    display: none;
  }

  .login-content {
    justify-content: center;
  }
}

/* === Floating inputs === */
.input-div {
  position: relative;
  display: grid;
  grid-template-columns: 7% 93%;
  margin: 25px 0;
  padding: 5px 0;
  border-bottom: 2px solid var(--border);
  text-align: left;
}

.input-div::before,
.input-div::after {
  content: '';
  position: absolute;
  bottom: -2px;
  width: 0%;
  height: 2px;
  background-color: var(--green);
  transition: width 0.4s;
}

.input-div::before {
  right: 50%;
}

.input-div::after {
  left: 50%;
}

.input-div.focus::before,
.input-div.focus::after {
  width: 50%;
}

.input-icon {
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--border);
  transition: color 0.3s;
}

.input-div.focus .input-icon {
  color: var(--green);
}

.input-wrapper {
  position: relative;
  height: 45px;
}

.input-wrapper label {
  position: absolute;
  left: 10px;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-muted);
  font-size: 18px;
  pointer-events: none;
  transition: top 0.3s, font-size 0.3s;
}

.input-div.focus .input-wrapper label {
  top: -5px;
  font-size: 15px;
}

.input {
  position: absolute;
  left: 0;
  top: 0;
  width: 100%;
  height: 100%;
  border: none;
  outline: none;
  background: none;
  padding: 0.5rem 0.7rem;
  font-size: 1.1rem;
  color: var(--text-secondary);
  font-family: inherit;
}

.input-div--multiline {
  grid-template-columns: 100%;
}

.input-div--multiline .input-wrapper {
  height: auto;
  min-height: 110px;
}

.input-div--multiline .input-wrapper label {
  top: 20px;
}

.input-div--multiline.focus .input-wrapper label {
  top: -5px;
}

.textarea {
  position: relative;
  min-height: 110px;
  padding-top: 1.5rem;
  resize: vertical;
}

.name-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.name-row .input-div {
  grid-template-columns: 100%;
}

.options-wrapper {
  display: flex;
  justify-content: space-between;
  align-items: center;
  font-size: var(--text-sm);
}

.checkbox-wrapper {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  color: var(--text-secondary);
}

.checkbox-wrapper input {
  accent-color: var(--green);
}

.buttons-wrapper {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.register-link {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.register-btn {
  font-weight: 600;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  min-width: 160px;
  height: 50px;
  padding: 0 1.75rem;
  border: none;
  border-radius: var(--radius-pill);
  background-image: linear-gradient(to right, var(--green), var(--green-dark), var(--green));
  background-size: 200%;
  color: #fff;
  font-family: inherit;
  font-size: 1.05rem;
  font-weight: 500;
  text-transform: uppercase;
  cursor: pointer;
  transition: background-position 0.5s;
}

.btn:hover {
  background-position: right;
  color: #fff;
}

.btn:disabled,
.btn.btn-busy {
  opacity: 0.7;
  cursor: progress;
}

.btn-outline {
  background: transparent;
  border: 2px solid var(--green);
  color: var(--green);
}

.btn-outline:hover {
  background: var(--green-soft);
  color: var(--green-dark);
}

.btn-link {
  background: none;
  border: none;
  padding: 0;
  color: var(--green);
  font-family: inherit;
  font-size: inherit;
  cursor: pointer;
}

.btn-link:hover {
  color: var(--green-dark);
  text-decoration: underline;
}

.btn-spinner {
  width: 16px;
  height: 16px;
  border: 2px solid rgba(255, 255, 255, 0.5);
  border-top-color: #fff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Notices === */
.notice {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 0.75rem;
  margin: 1rem 0;
  padding: 0.75rem 1rem;
  border-radius: var(--radius);
  font-size: var(--text-sm);
  text-align: left;
}

.notice-error {
  background: var(--danger-soft);
  color: var(--danger);
  border-left: 4px solid var(--danger);
}

.notice-success {
  background: var(--success-soft);
  color: var(--green-dark);
  border-left: 4px solid var(--green);
}

.notice-close {
  background: none;
  border: none;
  color: inherit;
  font-size: var(--text-lg);
  line-height: 1;
  cursor: pointer;
}

/* === Home === */
.hero {
  max-width: 760px;
  padding: 3rem 0 1rem;
}

.hero .page-title {
  font-size: var(--text-3xl);
  color: var(--green-dark);
}

.tagline {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.steps-grid,
.account-grid,
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
}

.account-grid {
  margin: 1.5rem 0;
}

.account-grid .btn {
  margin-top: 1rem;
}

.step-number {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 32px;
  height: 32px;
  margin-bottom: 0.75rem;
  border-radius: 50%;
  background: var(--green);
  color: #fff;
  font-weight: 600;
}

/* === Statistics === */
.statistics .btn-outline {
  margin-top: 1.5rem;
}

.stat {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
}

.stat-value {
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--green);
}

.stat-label {
  color: var(--text-secondary);
}

.progress {
  height: 10px;
  margin: 2rem 0 0.5rem;
  border-radius: 5px;
  background: var(--green-soft);
  overflow: hidden;
}

.progress-bar {
  height: 100%;
  background: var(--green);
  transition: width var(--transition-normal);
}

.loading-state {
  padding: 2rem 0;
}

.loading-message {
  color: var(--text-muted);
}

/* === Contacts / report === */
.contacts-grid {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 2rem;
  align-items: start;
}

@media (max-width: 900px) {
  .contacts-grid {
    grid-template-columns: 1fr;
  }
}

.contact-form .btn,
.report-form .btn {
  margin-top: 0.5rem;
}

.report-form {
  max-width: 640px;
  margin-top: 1.5rem;
}

.photo-picker {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 1rem;
  margin-bottom: 0.5rem;
}

.photo-picker__name {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.photo-picker__error {
  width: 100%;
  color: var(--danger);
  font-size: var(--text-sm);
}
"#;
